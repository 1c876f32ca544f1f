use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgGroup, Args, CommandFactory, Parser, Subcommand};
use svg2polar::kurbo::Point;
use svg2polar::{
    commentary, source, ConversionConfig, PolarError, RecordLayout, SYMMETRIZE_MAX_POINTS,
};

#[derive(Parser)]
#[command(
    name = "svg2polar",
    about = "Vector path outlines to angle/radius polygon records"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sample full SVG path data (curves included) at uniform steps
    #[command(group(ArgGroup::new("input").required(true).args(["svg_file", "path"])))]
    Sample {
        /// SVG document; every shape element is sampled
        #[arg(long)]
        svg_file: Option<PathBuf>,

        /// SVG path data string (use quotes)
        #[arg(long)]
        path: Option<String>,

        /// Number of samples taken along the path(s)
        #[arg(long, default_value = "800")]
        samples: usize,

        #[command(flatten)]
        reduce: ReduceArgs,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Use the vertices of straight-line commands (M, L, H, V, Z)
    Lines {
        /// SVG path data string (use quotes)
        #[arg(long)]
        path: String,

        #[command(flatten)]
        reduce: ReduceArgs,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Use every "x y" number pair found in the path text
    #[command(group(
        ArgGroup::new("input")
            .required(true)
            .multiple(true)
            .args(["path", "path_file"])
    ))]
    Pairs {
        /// SVG path data string (use quotes)
        #[arg(long)]
        path: Option<String>,

        /// Read the path data string from a file (takes precedence over --path)
        #[arg(long)]
        path_file: Option<PathBuf>,

        /// Rotate the polygon so the largest-radius vertex is at angle 0
        #[arg(long)]
        align_tip: bool,

        #[command(flatten)]
        reduce: ReduceArgs,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Mirror-average an existing record so it is left/right symmetric
    Symmetrize {
        /// Source file holding the record
        #[arg(long, default_value = "Form1.frm")]
        frm: PathBuf,

        /// Maximum pairs written back
        #[arg(long, default_value_t = SYMMETRIZE_MAX_POINTS)]
        max_points: usize,

        #[command(flatten)]
        record: RecordArgs,
    },
}

#[derive(Args)]
struct ReduceArgs {
    /// Scale factor applied to both axes
    #[arg(long, default_value = "1.1")]
    scale: f64,

    /// Maximum number of angle/radius pairs
    #[arg(long, default_value = "40")]
    max_points: usize,
}

#[derive(Args)]
struct RecordArgs {
    /// Object index to generate the record for
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    obj: i64,

    /// First slot index of the angle/radius pairs
    #[arg(long, default_value = "10", allow_hyphen_values = true)]
    start: i64,

    /// Array identifier used in the assignments
    #[arg(long, default_value = "SpaceObject")]
    ident: String,
}

impl RecordArgs {
    fn layout(&self) -> RecordLayout {
        RecordLayout {
            identifier: self.ident.clone(),
            object: self.obj,
            start: self.start,
        }
    }
}

impl ReduceArgs {
    fn config(&self, align_tip: bool) -> ConversionConfig {
        ConversionConfig {
            scale: self.scale,
            max_points: self.max_points,
            align_tip,
            ..ConversionConfig::default()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match output(run(cli.command)) {
        Ok(text) => print!("{}", text),
        Err(PolarError::InvalidOption(msg)) => usage_error(msg).exit(),
        Err(err) => return Err(err.into()),
    }
    Ok(())
}

/// Empty-input errors become a commentary line in place of the record.
fn output(result: Result<String, PolarError>) -> Result<String, PolarError> {
    match result {
        Err(err) if err.is_empty_input() => Ok(format!("{}\n", commentary(&err))),
        other => other,
    }
}

fn usage_error(msg: String) -> clap::Error {
    Cli::command().error(ErrorKind::InvalidValue, msg)
}

/// Run one subcommand and return the text written to stdout.
fn run(command: Command) -> Result<String, PolarError> {
    match command {
        Command::Sample {
            svg_file,
            path,
            samples,
            reduce,
            record,
        } => {
            let config = ConversionConfig {
                samples,
                ..reduce.config(false)
            };
            config.validate()?;
            let points = match (svg_file, path) {
                (Some(file), _) => {
                    log::info!("svg2polar \u{00b7} {}", file.display());
                    source::sample::sample_document(&source::read_input(&file)?, config.samples)?
                }
                (None, Some(data)) => source::sample::sample_data(&data, config.samples)?,
                (None, None) => return Err(PolarError::MissingPath),
            };
            forward(&points, &config, &record.layout())
        }
        Command::Lines {
            path,
            reduce,
            record,
        } => {
            let points = source::lines::extract(&path);
            forward(&points, &reduce.config(false), &record.layout())
        }
        Command::Pairs {
            path,
            path_file,
            align_tip,
            reduce,
            record,
        } => {
            let data = match path_file {
                Some(file) => source::read_input(&file)?,
                None => path.unwrap_or_default(),
            };
            if data.trim().is_empty() {
                return Err(PolarError::MissingPath);
            }
            let points = source::pairs::extract(&data);
            if points.is_empty() {
                return Err(PolarError::NoCoordinatePairs);
            }
            forward(&points, &reduce.config(align_tip), &record.layout())
        }
        Command::Symmetrize {
            frm,
            max_points,
            record,
        } => {
            if max_points == 0 {
                return Err(PolarError::InvalidOption("max-points must be at least 1".into()));
            }
            let layout = record.layout();
            let text = source::read_input(&frm)?;
            let mut pairs = svg2polar::symmetrize_record(&text, &layout)?;
            pairs.truncate(max_points);
            Ok(format!(
                "{}\n{}",
                commentary("Symmetrized polygon"),
                layout.record(&pairs)
            ))
        }
    }
}

/// Convert points and render the centroid comment plus the record.
fn forward(
    points: &[Point],
    config: &ConversionConfig,
    layout: &RecordLayout,
) -> Result<String, PolarError> {
    let conversion = svg2polar::convert(points, config)?;
    Ok(format!(
        "{}\n{}",
        conversion.center_comment(),
        layout.record(&conversion.pairs)
    ))
}
