//! Command-line surface for `readable`.

use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use readable_core::RawValue;
use readable_units::HumanReadableStyle;

use crate::request::{Domain, Request};

#[derive(Parser, Debug)]
#[command(name = "readable", version, about = "Parse, convert and format human-readable bit rates and durations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bit rates ("256 Mbps", "2.5 Kibit/s")
    Bps(ConvertArgs),
    /// Durations ("90 seconds", "12m40s")
    Time(TimeArgs),
    /// Answer one JSON request per stdin line
    Serve,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Readable value, e.g. "10 Mbps"
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Unit assumed when the value is a bare number
    #[arg(long, short = 'd')]
    pub default_unit: Option<String>,

    /// Print the magnitude in this unit instead of readable text
    #[arg(long = "as", short = 'a')]
    pub as_unit: Option<String>,

    /// Label style for readable output: full, short or abbr
    #[arg(long, env = "READABLE_STYLE", default_value = "full")]
    pub style: HumanReadableStyle,

    /// Emit a JSON document instead of plain text; READABLE_JSON accepts 1/0, yes/no, on/off
    #[arg(long, env = "READABLE_JSON", value_parser = BoolishValueParser::new())]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TimeArgs {
    #[command(flatten)]
    pub convert: ConvertArgs,

    /// Reject values below this duration
    #[arg(long, allow_hyphen_values = true)]
    pub min: Option<String>,

    /// Reject values above this duration
    #[arg(long, allow_hyphen_values = true)]
    pub max: Option<String>,
}

impl ConvertArgs {
    pub fn to_request(&self, domain: Domain) -> Request {
        Request {
            domain,
            value: RawValue::Text(self.value.clone()),
            default_unit: self.default_unit.clone(),
            as_unit: self.as_unit.clone(),
            style: self.style,
            min: None,
            max: None,
        }
    }
}

impl TimeArgs {
    pub fn to_request(&self) -> Request {
        Request {
            min: self.min.clone(),
            max: self.max.clone(),
            ..self.convert.to_request(Domain::Time)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_bps_command() {
        let cli = parse(&["readable", "bps", "10 Mbps", "--as", "Kbps", "--style", "short"]);
        let Command::Bps(args) = cli.command else {
            panic!("expected bps command");
        };
        assert_eq!(args.value, "10 Mbps");
        assert_eq!(args.as_unit.as_deref(), Some("Kbps"));
        assert_eq!(args.style, HumanReadableStyle::Short);

        let request = args.to_request(Domain::Bps);
        assert_eq!(request.domain, Domain::Bps);
        assert_eq!(request.value, RawValue::Text("10 Mbps".to_string()));
    }

    #[test]
    fn test_time_command_with_bounds() {
        let cli = parse(&["readable", "time", "-2 secs", "--min", "-5s", "--max", "1m", "-d", "ms"]);
        let Command::Time(args) = cli.command else {
            panic!("expected time command");
        };
        let request = args.to_request();
        assert_eq!(request.domain, Domain::Time);
        assert_eq!(request.value, RawValue::Text("-2 secs".to_string()));
        assert_eq!(request.min.as_deref(), Some("-5s"));
        assert_eq!(request.max.as_deref(), Some("1m"));
        assert_eq!(request.default_unit.as_deref(), Some("ms"));
    }

    #[test]
    fn test_unknown_style_rejected() {
        assert!(Cli::try_parse_from(["readable", "bps", "1 bps", "--style", "long"]).is_err());
    }

    #[test]
    fn test_json_flag_from_environment() {
        let json_of = |cli: Cli| match cli.command {
            Command::Bps(args) => args.json,
            _ => panic!("expected bps command"),
        };

        assert!(json_of(parse(&["readable", "bps", "1 bps", "--json"])));

        std::env::set_var("READABLE_JSON", "1");
        let on = Cli::try_parse_from(["readable", "bps", "1 bps"]);
        std::env::set_var("READABLE_JSON", "off");
        let off = Cli::try_parse_from(["readable", "bps", "1 bps"]);
        std::env::remove_var("READABLE_JSON");

        assert!(json_of(on.unwrap()));
        assert!(!json_of(off.unwrap()));
    }

    #[test]
    fn test_serve_command() {
        assert!(matches!(parse(&["readable", "serve"]).command, Command::Serve));
    }
}
