//! Rocket Relations - evaluates c* and Cf for an ideal rocket from the command line.
//!
//! Arguments are read as raw text so that non-numeric input is reported by
//! the relations' own validation rather than rejected by the parser.

use std::process::ExitCode;

use clap::Parser;
use rocket_relations::support::rocket::{CfInput, CstarInput, RelationError, Value};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "rocket-relations")]
#[command(about = "Characteristic velocity and thrust coefficient of an ideal rocket")]
struct Cli {
    /// Ratio of specific heats
    #[arg(allow_hyphen_values = true)]
    gamma: String,

    /// Specific gas constant R, J/kg·K
    #[arg(allow_hyphen_values = true)]
    gas_constant: String,

    /// Chamber stagnation temperature T0, K
    #[arg(allow_hyphen_values = true)]
    stagnation_temperature: String,

    /// Exit to chamber pressure ratio Pe/P0
    #[arg(allow_hyphen_values = true)]
    pe_over_p0: String,

    /// Ambient to chamber pressure ratio Pa/P0
    #[arg(allow_hyphen_values = true)]
    pa_over_p0: String,

    /// Nozzle exit to throat area ratio Ae/A*
    #[arg(allow_hyphen_values = true)]
    ae_over_astar: String,

    /// Decimal digits printed for each result
    #[arg(long, default_value_t = 7)]
    precision: usize,

    /// Expected c* to validate against
    #[arg(long)]
    expect_cstar: Option<f64>,

    /// Expected Cf to validate against
    #[arg(long)]
    expect_cf: Option<f64>,

    /// Absolute tolerance used when validating against expected values
    #[arg(long, default_value_t = 1e-4)]
    tolerance: f64,
}

/// Results of evaluating both relations for one set of arguments.
struct Report {
    cstar: Result<f64, RelationError>,
    cf: Result<f64, RelationError>,
}

impl Report {
    fn evaluate(cli: &Cli) -> Self {
        let cstar = CstarInput::from_values(
            &Value::parse(&cli.gamma),
            &Value::parse(&cli.gas_constant),
            &Value::parse(&cli.stagnation_temperature),
        )
        .map(|input| input.cstar());

        let cf = CfInput::from_values(
            &Value::parse(&cli.gamma),
            &Value::parse(&cli.pe_over_p0),
            &Value::parse(&cli.pa_over_p0),
            &Value::parse(&cli.ae_over_astar),
        )
        .map(|input| input.cf());

        Self { cstar, cf }
    }

    /// Renders the lines printed to stdout.
    fn render(&self, cli: &Cli) -> Vec<String> {
        let precision = cli.precision;
        let mut lines = Vec::new();

        if let Ok(cstar) = &self.cstar {
            lines.push(format!(
                "Characteristic Velocity (c*): {cstar:.precision$} m/s"
            ));
        }
        if let Ok(cf) = &self.cf {
            lines.push(format!("Thrust Coefficient (CF): {cf:.precision$}"));
        }

        let checks = [
            ("c*", &self.cstar, cli.expect_cstar),
            ("CF", &self.cf, cli.expect_cf),
        ];
        let mut validation = checks
            .into_iter()
            .filter_map(|(name, result, expected)| match (result, expected) {
                (Ok(actual), Some(expected)) => Some(format!(
                    "{name} matches expected: {}",
                    (actual - expected).abs() < cli.tolerance
                )),
                _ => None,
            })
            .peekable();

        if validation.peek().is_some() {
            lines.push(String::new());
            lines.push("Validation:".to_string());
            lines.extend(validation);
        }

        lines
    }

    fn failures(&self) -> impl Iterator<Item = (&'static str, &RelationError)> {
        [("c*", &self.cstar), ("Cf", &self.cf)]
            .into_iter()
            .filter_map(|(name, result)| result.as_ref().err().map(|err| (name, err)))
    }
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rocket_relations=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    info!(?cli, "evaluating ideal rocket relations");

    let report = Report::evaluate(&cli);
    for line in report.render(&cli) {
        println!("{line}");
    }

    let mut failed = false;
    for (name, err) in report.failures() {
        error!("{name} could not be computed: {err}");
        failed = true;
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
