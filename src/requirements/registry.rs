//! Requirement tables and package managers.
//!
//! Each supported OS family has one fixed, ordered list of tools. Order only
//! matters for prerequisites: the package manager is bootstrapped before any
//! package is installed through it.

use crate::requirements::version::Version;
use crate::shell::CommandSpec;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Host operating system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OsFamily {
    Windows,
    MacOS,
    Linux,
    Unsupported,
}

impl OsFamily {
    /// Every family, supported or not.
    pub const ALL: [OsFamily; 4] = [
        OsFamily::Windows,
        OsFamily::MacOS,
        OsFamily::Linux,
        OsFamily::Unsupported,
    ];

    /// Detect the family this binary was built for.
    pub fn current() -> Self {
        Self::from_os_str(std::env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a family.
    pub fn from_os_str(os: &str) -> Self {
        match os.to_ascii_lowercase().as_str() {
            "windows" => OsFamily::Windows,
            "macos" | "darwin" => OsFamily::MacOS,
            "linux" => OsFamily::Linux,
            _ => OsFamily::Unsupported,
        }
    }

    /// The package manager used to install tools on this family.
    pub fn package_manager(&self) -> Option<PackageManager> {
        match self {
            OsFamily::Windows => Some(PackageManager::Chocolatey),
            OsFamily::MacOS => Some(PackageManager::Homebrew),
            OsFamily::Linux => Some(PackageManager::Apt),
            OsFamily::Unsupported => None,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Windows => "Windows",
            OsFamily::MacOS => "macOS",
            OsFamily::Linux => "Linux",
            OsFamily::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Platform package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Chocolatey,
    Homebrew,
    Apt,
}

impl PackageManager {
    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Chocolatey => "choco",
            PackageManager::Homebrew => "brew",
            PackageManager::Apt => "apt-get",
        }
    }

    /// Whether installs go through `sudo` when not already root.
    pub fn needs_root(&self) -> bool {
        matches!(self, PackageManager::Apt)
    }

    /// Build the command that installs `package`.
    pub fn install_command(&self, package: &str, extra_args: &[&str], elevated: bool) -> CommandSpec {
        let mut args: Vec<String> = vec!["install".to_string()];
        args.extend(extra_args.iter().map(|a| a.to_string()));
        if matches!(self, PackageManager::Chocolatey | PackageManager::Apt) {
            args.push("-y".to_string());
        }
        args.push(package.to_string());
        self.privileged(CommandSpec::new(self.program(), args), elevated)
    }

    /// Build the command that refreshes the package index, if the manager has one.
    pub fn refresh_command(&self, elevated: bool) -> Option<CommandSpec> {
        match self {
            PackageManager::Chocolatey => None,
            PackageManager::Homebrew => Some(CommandSpec::new("brew", ["update"])),
            PackageManager::Apt => Some(self.privileged(CommandSpec::new("apt-get", ["update"]), elevated)),
        }
    }

    fn privileged(&self, spec: CommandSpec, elevated: bool) -> CommandSpec {
        if self.needs_root() && !elevated {
            spec.with_sudo()
        } else {
            spec
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PackageManager::Chocolatey => "Chocolatey",
            PackageManager::Homebrew => "Homebrew",
            PackageManager::Apt => "APT",
        };
        f.write_str(name)
    }
}

/// How to tell whether a tool is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCheck {
    /// Run `<command> --version` and parse the banner.
    VersionFlag,
    /// Run `<command> <args>`; success with non-empty stdout means present.
    Succeeds(&'static [&'static str]),
}

/// How to install a missing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallAction {
    /// Install a package through the platform package manager.
    Package(&'static str),
    /// Install a package with extra manager arguments (e.g. `--cask`).
    PackageWithArgs {
        package: &'static str,
        extra_args: &'static [&'static str],
    },
    /// Refresh the package index, then install the package.
    RefreshThenPackage(&'static str),
    /// Run a program directly. Used to bootstrap package managers.
    Program {
        program: &'static str,
        args: &'static [&'static str],
    },
}

impl InstallAction {
    /// Commands to run, in order. Empty when a package install has no manager.
    pub fn commands(&self, manager: Option<PackageManager>, elevated: bool) -> Vec<CommandSpec> {
        match (self, manager) {
            (InstallAction::Program { program, args }, _) => {
                vec![CommandSpec::new(*program, args.iter().copied())]
            }
            (InstallAction::Package(package), Some(pm)) => {
                vec![pm.install_command(package, &[], elevated)]
            }
            (InstallAction::PackageWithArgs { package, extra_args }, Some(pm)) => {
                vec![pm.install_command(package, extra_args, elevated)]
            }
            (InstallAction::RefreshThenPackage(package), Some(pm)) => pm
                .refresh_command(elevated)
                .into_iter()
                .chain(std::iter::once(pm.install_command(package, &[], elevated)))
                .collect(),
            (_, None) => Vec::new(),
        }
    }
}

/// A tool the build needs.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    /// Display name (e.g. "CMake", "MSVC Build Tools").
    pub name: &'static str,
    /// Executable probed on `PATH`.
    pub command: &'static str,
    /// Oldest acceptable version, if any.
    pub minimum_version: Option<Version>,
    /// How presence is checked.
    pub check: ToolCheck,
    /// How the tool is installed when missing.
    pub install: InstallAction,
    /// Directory to append to `PATH` after a successful install.
    pub path_after_install: Option<fn() -> PathBuf>,
}

impl ToolRequirement {
    const fn versioned(
        name: &'static str,
        command: &'static str,
        minimum_version: Option<Version>,
        install: InstallAction,
    ) -> Self {
        Self {
            name,
            command,
            minimum_version,
            check: ToolCheck::VersionFlag,
            install,
            path_after_install: None,
        }
    }
}

/// Minimum CMake for the engine's presets.
pub const CMAKE_MINIMUM: Version = Version::new(3, 26);

const CHOCOLATEY_INSTALL_SCRIPT: &str = "[System.Net.ServicePointManager]::SecurityProtocol = 3072; \
     iex ((New-Object System.Net.WebClient).DownloadString('https://community.chocolatey.org/install.ps1'))";

const HOMEBREW_INSTALL_SCRIPT: &str = "/bin/bash -c \"$(curl -fsSL https://raw.githubusercontent.com/Homebrew/install/HEAD/install.sh)\"";

/// `%ALLUSERSPROFILE%\chocolatey\bin`.
pub fn chocolatey_bin_dir() -> PathBuf {
    std::env::var_os("ALLUSERSPROFILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"))
        .join("chocolatey")
        .join("bin")
}

const WINDOWS_REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement {
        name: "Chocolatey",
        command: "choco",
        minimum_version: None,
        check: ToolCheck::VersionFlag,
        install: InstallAction::Program {
            program: "powershell",
            args: &[
                "-NoProfile",
                "-InputFormat",
                "None",
                "-ExecutionPolicy",
                "Bypass",
                "-Command",
                CHOCOLATEY_INSTALL_SCRIPT,
            ],
        },
        path_after_install: Some(chocolatey_bin_dir),
    },
    ToolRequirement::versioned("Git", "git", None, InstallAction::Package("git")),
    ToolRequirement::versioned(
        "CMake",
        "cmake",
        Some(CMAKE_MINIMUM),
        InstallAction::Package("cmake"),
    ),
    ToolRequirement::versioned(
        "MSVC Build Tools",
        "cl",
        None,
        InstallAction::Package("visualstudio2022buildtools"),
    ),
    ToolRequirement::versioned("ccache", "ccache", None, InstallAction::Package("ccache")),
    ToolRequirement::versioned("Ninja", "ninja", None, InstallAction::Package("ninja")),
    ToolRequirement::versioned(
        ".NET SDK",
        "dotnet",
        None,
        InstallAction::Package("dotnet-sdk"),
    ),
];

const MACOS_REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement::versioned(
        "Homebrew",
        "brew",
        None,
        InstallAction::Program {
            program: "/bin/bash",
            args: &["-c", HOMEBREW_INSTALL_SCRIPT],
        },
    ),
    ToolRequirement::versioned("Git", "git", None, InstallAction::Package("git")),
    ToolRequirement::versioned(
        "CMake",
        "cmake",
        Some(CMAKE_MINIMUM),
        InstallAction::Package("cmake"),
    ),
    ToolRequirement {
        name: "Xcode Command Line Tools",
        command: "xcode-select",
        minimum_version: None,
        check: ToolCheck::Succeeds(&["-p"]),
        install: InstallAction::Program {
            program: "xcode-select",
            args: &["--install"],
        },
        path_after_install: None,
    },
    ToolRequirement::versioned("ccache", "ccache", None, InstallAction::Package("ccache")),
    ToolRequirement::versioned("Ninja", "ninja", None, InstallAction::Package("ninja")),
    ToolRequirement::versioned(
        ".NET SDK",
        "dotnet",
        None,
        InstallAction::PackageWithArgs {
            package: "dotnet-sdk",
            extra_args: &["--cask"],
        },
    ),
];

const LINUX_REQUIREMENTS: &[ToolRequirement] = &[
    ToolRequirement::versioned("Git", "git", None, InstallAction::Package("git")),
    ToolRequirement::versioned(
        "CMake",
        "cmake",
        Some(CMAKE_MINIMUM),
        InstallAction::Package("cmake"),
    ),
    ToolRequirement::versioned(
        "GCC",
        "gcc",
        None,
        InstallAction::Package("build-essential"),
    ),
    ToolRequirement::versioned(
        "ccache",
        "ccache",
        None,
        InstallAction::RefreshThenPackage("ccache"),
    ),
    ToolRequirement::versioned("Ninja", "ninja", None, InstallAction::Package("ninja-build")),
    ToolRequirement::versioned(
        ".NET SDK",
        "dotnet",
        None,
        InstallAction::Package("dotnet-sdk-8.0"),
    ),
];

/// The ordered requirement list for an OS family.
///
/// Unsupported families get an empty list.
pub fn requirements_for(os: OsFamily) -> &'static [ToolRequirement] {
    match os {
        OsFamily::Windows => WINDOWS_REQUIREMENTS,
        OsFamily::MacOS => MACOS_REQUIREMENTS,
        OsFamily::Linux => LINUX_REQUIREMENTS,
        OsFamily::Unsupported => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn from_os_str_maps_known_families() {
        assert_eq!(OsFamily::from_os_str("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_os_str("macos"), OsFamily::MacOS);
        assert_eq!(OsFamily::from_os_str("Darwin"), OsFamily::MacOS);
        assert_eq!(OsFamily::from_os_str("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_os_str("freebsd"), OsFamily::Unsupported);
        assert_eq!(OsFamily::from_os_str(""), OsFamily::Unsupported);
    }

    #[test]
    fn current_matches_build_target() {
        let os = OsFamily::current();
        if cfg!(target_os = "linux") {
            assert_eq!(os, OsFamily::Linux);
        } else if cfg!(target_os = "macos") {
            assert_eq!(os, OsFamily::MacOS);
        } else if cfg!(target_os = "windows") {
            assert_eq!(os, OsFamily::Windows);
        }
    }

    #[test]
    fn each_supported_family_has_a_manager() {
        for os in OsFamily::ALL {
            assert_eq!(
                os.package_manager().is_some(),
                os != OsFamily::Unsupported,
                "{}",
                os
            );
        }
    }

    #[test]
    fn unsupported_has_no_requirements() {
        assert!(requirements_for(OsFamily::Unsupported).is_empty());
    }

    #[test]
    fn package_manager_is_bootstrapped_first() {
        assert_eq!(requirements_for(OsFamily::Windows)[0].command, "choco");
        assert_eq!(requirements_for(OsFamily::MacOS)[0].command, "brew");
    }

    #[test]
    fn cmake_has_minimum_everywhere() {
        for os in [OsFamily::Windows, OsFamily::MacOS, OsFamily::Linux] {
            let cmake = requirements_for(os)
                .iter()
                .find(|r| r.command == "cmake")
                .expect("cmake listed");
            assert_eq!(cmake.minimum_version, Some(CMAKE_MINIMUM));
        }
    }

    #[test]
    fn no_duplicate_commands_per_family() {
        for os in OsFamily::ALL {
            let mut seen = HashSet::new();
            for req in requirements_for(os) {
                assert!(seen.insert(req.command), "{} listed twice for {}", req.command, os);
            }
        }
    }

    #[test]
    fn every_requirement_yields_install_commands() {
        for os in [OsFamily::Windows, OsFamily::MacOS, OsFamily::Linux] {
            for req in requirements_for(os) {
                let cmds = req.install.commands(os.package_manager(), false);
                assert!(!cmds.is_empty(), "{} on {} has no install", req.name, os);
            }
        }
    }

    #[test]
    fn apt_install_uses_sudo_unless_elevated() {
        let cmd = PackageManager::Apt.install_command("git", &[], false);
        assert_eq!(cmd.to_string(), "sudo apt-get install -y git");

        let cmd = PackageManager::Apt.install_command("git", &[], true);
        assert_eq!(cmd.to_string(), "apt-get install -y git");
    }

    #[test]
    fn choco_and_brew_install_commands() {
        assert_eq!(
            PackageManager::Chocolatey
                .install_command("cmake", &[], false)
                .to_string(),
            "choco install -y cmake"
        );
        assert_eq!(
            PackageManager::Homebrew
                .install_command("dotnet-sdk", &["--cask"], false)
                .to_string(),
            "brew install --cask dotnet-sdk"
        );
    }

    #[test]
    fn refresh_then_package_runs_update_first() {
        let cmds = InstallAction::RefreshThenPackage("ccache").commands(Some(PackageManager::Apt), false);
        let rendered: Vec<String> = cmds.iter().map(|c| c.to_string()).collect();
        assert_eq!(
            rendered,
            vec!["sudo apt-get update", "sudo apt-get install -y ccache"]
        );
    }

    #[test]
    fn refresh_then_package_without_index_is_single_install() {
        let cmds =
            InstallAction::RefreshThenPackage("ccache").commands(Some(PackageManager::Chocolatey), false);
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn package_without_manager_has_no_commands() {
        assert!(InstallAction::Package("git").commands(None, false).is_empty());
    }

    #[test]
    fn program_action_ignores_manager() {
        let cmds = InstallAction::Program {
            program: "xcode-select",
            args: &["--install"],
        }
        .commands(None, false);
        assert_eq!(cmds, vec![CommandSpec::new("xcode-select", ["--install"])]);
    }

    #[test]
    fn chocolatey_bootstrap_appends_bin_dir() {
        let choco = &requirements_for(OsFamily::Windows)[0];
        let dir = (choco.path_after_install.expect("choco adds to PATH"))();
        assert!(dir.ends_with(PathBuf::from("chocolatey").join("bin")));
    }

    #[test]
    fn xcode_tools_use_path_query() {
        let xcode = requirements_for(OsFamily::MacOS)
            .iter()
            .find(|r| r.command == "xcode-select")
            .unwrap();
        assert_eq!(xcode.check, ToolCheck::Succeeds(&["-p"]));
    }

    #[test]
    fn os_family_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&OsFamily::MacOS).unwrap(), "\"macos\"");
    }
}
