//! Benchmark Charts - chart string-replacement benchmark exports in the terminal

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bench_charts::chart::render_text;
use bench_charts::core::labels::{InputSelection, COMPARISON_ACROSS_INPUTS};
use bench_charts::{ChartConfig, ChartSession, Dataset, SelectionState};

#[derive(Parser)]
#[command(name = "bench-charts")]
#[command(about = "Chart string-replacement benchmark results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List inputs, replacement effects and algorithms of an export
    Summary {
        /// Tab-separated export file
        file: PathBuf,
    },

    /// Compute one chart and print it
    Chart {
        /// Tab-separated export file
        file: PathBuf,

        #[command(flatten)]
        options: ChartOptions,

        /// Print the chart frame as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Re-import an export periodically and redraw the chart
    Watch {
        /// Tab-separated export file
        file: PathBuf,

        /// Seconds between imports
        #[arg(short, long, default_value = "2")]
        interval: u64,

        #[command(flatten)]
        options: ChartOptions,
    },

    /// Show configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
struct ChartOptions {
    /// Input to chart (defaults to the first record's input)
    #[arg(long, conflicts_with = "compare")]
    input: Option<String>,

    /// Show the comparison across inputs
    #[arg(long)]
    compare: bool,

    /// Replacement effect to chart
    #[arg(long)]
    effect: Option<String>,

    /// Hide an algorithm (repeatable)
    #[arg(long = "disable", value_name = "ALGORITHM")]
    disabled: Vec<String>,

    /// Drop this many of the shortest input lengths
    #[arg(long)]
    x_min: Option<usize>,

    /// Index of the longest input length to keep
    #[arg(long)]
    x_max: Option<usize>,

    /// Divide runtimes by input length in bytes
    #[arg(long)]
    normalise: bool,

    /// Compare the ASCII-only inputs instead of the others
    #[arg(long, conflicts_with = "no_ascii")]
    ascii: bool,

    /// Compare the inputs that are not ASCII-only, overriding the config
    #[arg(long)]
    no_ascii: bool,
}

impl ChartOptions {
    fn apply(&self, selection: &mut SelectionState, dataset: &Dataset) -> Result<(), String> {
        if self.compare {
            selection.select_input(dataset, Some(InputSelection::Comparison));
        } else if let Some(input) = &self.input {
            if !dataset.inputs().contains(input) {
                return Err(format!("No records for input {:?}", input));
            }
            selection.select_input(dataset, Some(InputSelection::from_label(input)));
        }

        if let Some(effect) = &self.effect {
            let applicable = bench_charts::applicable_replacement_effects(dataset, selection);
            if !applicable.contains(effect) {
                return Err(format!(
                    "Replacement effect {:?} does not apply here (choose from: {})",
                    effect,
                    applicable.join(", ")
                ));
            }
            selection.select_replacement_effect(Some(effect.clone()));
        }

        for algorithm in &self.disabled {
            selection.set_algorithm_enabled(algorithm, false);
        }

        if let Some(min) = self.x_min {
            selection.set_x_domain_min(min);
        }
        if let Some(max) = self.x_max {
            selection.set_x_domain_max(max);
        }

        if self.normalise && !selection.set_normalise_by_input_byte_length(true) {
            warn!("Normalisation is fixed for this view, ignoring --normalise");
        }
        if self.ascii {
            selection.set_show_ascii_inputs_in_comparison_chart(true);
        } else if self.no_ascii {
            selection.set_show_ascii_inputs_in_comparison_chart(false);
        }

        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = ChartConfig::load_or_default()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.as_str()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Summary { file } => {
            let session = ChartSession::new(config);
            let count = session.import(&file).await?;
            let summary = session
                .inspect(|dataset, _, styles| {
                    let mut out = format!("Records: {}\n\nInputs:\n", count);
                    for input in dataset.inputs_in_display_order() {
                        let effects =
                            dataset.replacement_effects_for(&InputSelection::from_label(&input));
                        out.push_str(&format!("  {:<32} {}\n", input, effects.join(", ")));
                    }
                    let comparison = dataset.replacement_effects_for(&InputSelection::Comparison);
                    out.push_str(&format!(
                        "  {:<32} {}\n\nAlgorithms:\n",
                        COMPARISON_ACROSS_INPUTS,
                        comparison.join(", ")
                    ));
                    for (algorithm, style) in styles.iter() {
                        out.push_str(&format!(
                            "  {} {} {}{}\n",
                            style.symbol.glyph(),
                            style.hex_colour(),
                            algorithm,
                            if style.stroke.is_dashed() { " (dashed)" } else { "" }
                        ));
                    }
                    out
                })
                .await;
            print!("{}", summary);
        }

        Commands::Chart {
            file,
            options,
            json,
        } => {
            let session = ChartSession::new(config);
            session.import(&file).await?;
            session
                .update(|selection, dataset| options.apply(selection, dataset))
                .await?;

            let frame = session.view().await;
            if json {
                println!("{}", serde_json::to_string_pretty(&frame)?);
            } else {
                print!("{}", render_text(&frame));
            }
        }

        Commands::Watch {
            file,
            interval,
            options,
        } => {
            info!("Watching {} (interval: {}s)", file.display(), interval);
            let session = ChartSession::new(config);

            loop {
                redraw(&session, &file, &options).await;
                tokio::select! {
                    _ = tokio::time::sleep(Duration::from_secs(interval.max(1))) => {}
                    _ = tokio::signal::ctrl_c() => {
                        info!("Stopping watch");
                        break;
                    }
                }
            }
        }

        Commands::Config { write } => {
            println!("Configuration ({}):", ChartConfig::config_path().display());
            println!("{}", toml::to_string_pretty(&config)?);

            if write {
                let path = ChartConfig::config_path();
                config.save(&path)?;
                println!("Wrote {}", path.display());
            }
        }
    }

    Ok(())
}

/// Re-import and redraw; a failed import keeps showing the previous chart
async fn redraw(session: &ChartSession, file: &Path, options: &ChartOptions) {
    if let Err(e) = session.import(file).await {
        warn!("Import failed, keeping previous data: {}", e);
        if session.is_empty().await {
            return;
        }
    } else if let Err(e) = session
        .update(|selection, dataset| options.apply(selection, dataset))
        .await
    {
        warn!("{}", e);
    }

    // Clear screen
    print!("\x1B[2J\x1B[1;1H");
    print!("{}", render_text(&session.view().await));
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench_charts::core::labels::EMPTY_STRING_INPUT;
    use bench_charts::parse;
    use clap::CommandFactory;

    fn dataset() -> Dataset {
        Dataset::new(
            parse(
                "Few matches\t10\t12\tLength unchanged\tAlgoA\t0\t500\n\
                 Few matches (ASCII)\t10\t12\tLength unchanged\tAlgoA\t0\t400\n\
                 Only matches\t3\t3\tLength increased\tAlgoB\t0\t20\n\
                 Empty string\t0\t0\tLength unchanged\tAlgoA\t0\t50\n",
            )
            .unwrap(),
        )
    }

    fn chart_options(args: &[&str]) -> ChartOptions {
        let mut argv = vec!["bench-charts", "chart", "results.tsv"];
        argv.extend_from_slice(args);
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Chart { options, .. } => options,
            _ => panic!("expected the chart command"),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_unknown_input_rejected() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        let options = ChartOptions {
            input: Some("Zero matches".into()),
            ..Default::default()
        };

        let err = options.apply(&mut selection, &data).unwrap_err();
        assert!(err.contains("Zero matches"));
        assert_eq!(
            selection.selected_input(),
            Some(&InputSelection::from_label("Few matches"))
        );
    }

    #[test]
    fn test_inapplicable_effect_rejected() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        let options = ChartOptions {
            input: Some("Only matches".into()),
            effect: Some("Length unchanged".into()),
            ..Default::default()
        };

        let err = options.apply(&mut selection, &data).unwrap_err();
        assert!(err.contains("Length increased"));
        assert_eq!(selection.selected_replacement_effect(), Some("Length increased"));
    }

    #[test]
    fn test_options_applied() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        let options = chart_options(&[
            "--input",
            "Few matches",
            "--effect",
            "Length unchanged",
            "--disable",
            "AlgoB",
            "--x-min",
            "2",
            "--x-max",
            "1",
            "--normalise",
        ]);

        options.apply(&mut selection, &data).unwrap();
        assert!(!selection.is_algorithm_enabled("AlgoB"));
        assert!(selection.is_algorithm_enabled("AlgoA"));
        assert_eq!(selection.x_domain_min(), 1);
        assert_eq!(selection.x_domain_max(), 1);
        assert!(selection.normalise_by_input_byte_length());
    }

    #[test]
    fn test_normalise_ignored_when_pinned() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        let options = ChartOptions {
            input: Some(EMPTY_STRING_INPUT.into()),
            normalise: true,
            ..Default::default()
        };

        options.apply(&mut selection, &data).unwrap();
        assert!(!selection.normalise_by_input_byte_length());
    }

    #[test]
    fn test_ascii_flags() {
        let data = dataset();
        let mut selection = SelectionState::initial(&data);
        selection.set_show_ascii_inputs_in_comparison_chart(true);

        chart_options(&["--compare"]).apply(&mut selection, &data).unwrap();
        assert!(selection.show_ascii_inputs_in_comparison_chart());

        chart_options(&["--compare", "--no-ascii"])
            .apply(&mut selection, &data)
            .unwrap();
        assert!(!selection.show_ascii_inputs_in_comparison_chart());

        chart_options(&["--ascii"]).apply(&mut selection, &data).unwrap();
        assert!(selection.show_ascii_inputs_in_comparison_chart());

        assert!(
            Cli::try_parse_from(["bench-charts", "chart", "f", "--ascii", "--no-ascii"]).is_err()
        );
        assert!(
            Cli::try_parse_from(["bench-charts", "chart", "f", "--compare", "--input", "A"])
                .is_err()
        );
    }
}
