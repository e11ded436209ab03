mod cli;

use clap::Parser;
use cli::{Cli, Commands, Query};
use rand::{rngs::StdRng, SeedableRng};
use salamanca::{convert, LogNormal, Measure};
use tracing::warn;
use tracing_subscriber::EnvFilter;

impl Cli {
    fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Convert {
                from,
                to,
                empirical,
                values,
            } => {
                let gini_theil = matches!(
                    (from, to),
                    (Measure::Gini, Measure::Theil) | (Measure::Theil, Measure::Gini)
                );
                if empirical && !gini_theil {
                    warn!("--empirical only affects gini <-> theil conversions");
                }
                print_all(&convert(values, from, to, empirical)?);
            }
            Commands::Lognormal { dist, query } => {
                let lognormal = LogNormal::new(&dist.fields());
                match query {
                    Query::Params => {
                        let params = lognormal.params(&[])?;
                        println!("shape {}", params.shape);
                        println!("scale {}", params.scale);
                    }
                    Query::Mean => println!("{}", lognormal.mean(&[])?),
                    Query::Median => println!("{}", lognormal.median(&[])?),
                    Query::Var => println!("{}", lognormal.var(&[])?),
                    Query::Std => println!("{}", lognormal.std(&[])?),
                    Query::Cdf(points) => print_all(&lognormal.cdf(points.x, &[])?),
                    Query::Ppf(points) => print_all(&lognormal.ppf(points.x, &[])?),
                    Query::Pdf(points) => print_all(&lognormal.pdf(points.x, &[])?),
                    Query::Quantile(points) => print_all(&lognormal.quantile(points.x, &[])?),
                    Query::Lorenz(points) => print_all(&lognormal.lorenz(points.x, &[])?),
                    Query::Sample { sample_size, seed } => {
                        let mut rng = match seed {
                            Some(seed) => StdRng::seed_from_u64(seed),
                            None => StdRng::from_entropy(),
                        };
                        print_all(&lognormal.sample(&mut rng, sample_size, &[])?);
                    }
                }
            }
        }

        Ok(())
    }
}

fn print_all(values: &[f64]) {
    for value in values {
        println!("{}", value);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run()
}
