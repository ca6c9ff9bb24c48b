mod logger;

use kernel_quirks::builtin::QUIRKS;
use kernel_quirks::{DeviceIdentity, QuirkIndex, parse_version};
use log::LevelFilter;
use logger::StderrLogger;
use std::env;
use std::process::ExitCode;

#[derive(Debug, thiserror::Error)]
enum ProbeError {
    #[error("usage: quirk-probe <compatible> <vendor> <sub_vendor> <impl_version> (missing {0})")]
    MissingArgument(&'static str),
    #[error("invalid implementation version {0:?}")]
    BadVersion(String),
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

/// `-` stands for a field the firmware did not report.
fn field(arg: &str) -> Option<&str> {
    (arg != "-").then_some(arg)
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ProbeError> {
    let level = env::var("QUIRK_LOG")
        .ok()
        .and_then(|v| StderrLogger::level_from(&v))
        .unwrap_or(LevelFilter::Info);
    StderrLogger::new(level).init()?;

    // args: <compatible> <vendor> <sub_vendor> <impl_version>
    let mut args = env::args().skip(1);
    let compatible = args.next().ok_or(ProbeError::MissingArgument("compatible"))?;
    let vendor = args.next().ok_or(ProbeError::MissingArgument("vendor"))?;
    let sub_vendor = args.next().ok_or(ProbeError::MissingArgument("sub_vendor"))?;
    let version = args.next().ok_or(ProbeError::MissingArgument("impl_version"))?;
    let impl_version = parse_version(&version).ok_or(ProbeError::BadVersion(version))?;

    let index = QuirkIndex::build(&QUIRKS);
    let identity = DeviceIdentity::new(
        field(&compatible),
        field(&vendor),
        field(&sub_vendor),
        impl_version,
    );

    for name in index.enable_quirks_for(&identity) {
        println!("{name}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_unspecified() {
        assert_eq!(field("-"), None);
        assert_eq!(field("Qualcomm"), Some("Qualcomm"));
        assert_eq!(field(""), Some(""));
    }
}
