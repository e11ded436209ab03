use clap::{Args, Parser, Subcommand};
use salamanca::{Field, Measure};

#[derive(Parser)]
#[command(author, version)]
/// Convert between inequality measures and query log-normal income distributions.
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Convert values from one inequality measure to another.
    Convert {
        #[arg(value_enum)]
        from: Measure,
        #[arg(value_enum)]
        to: Measure,

        /// Use the decile-calibrated Theil relationship (gini <-> theil only).
        #[arg(long)]
        empirical: bool,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Query a log-normal income distribution.
    Lognormal {
        #[command(flatten)]
        dist: DistributionArgs,

        #[command(subcommand)]
        query: Query,
    },
}

#[derive(Args, Clone)]
pub struct DistributionArgs {
    /// Income level of the distribution.
    #[arg(long, default_value = "1.0")]
    pub inc: f64,

    /// Treat the income level as the median rather than the mean.
    #[arg(long)]
    pub median: bool,

    #[command(flatten)]
    pub measure: MeasureArgs,
}

#[derive(Args, Clone)]
#[group(multiple = false)]
pub struct MeasureArgs {
    #[arg(long)]
    pub gini: Option<f64>,
    #[arg(long)]
    pub theil: Option<f64>,
}

impl DistributionArgs {
    pub fn fields(&self) -> Vec<Field> {
        vec![
            Field::inc(self.inc),
            Field::mean(!self.median),
            Field::Gini(self.measure.gini),
            Field::Theil(self.measure.theil),
        ]
    }
}

#[derive(Subcommand, Clone)]
pub enum Query {
    /// Print the derived shape and scale.
    Params,
    Mean,
    Median,
    Var,
    Std,
    /// Cumulative share of the population at each income.
    Cdf(Points),
    /// Same as cdf.
    Ppf(Points),
    /// Density at each income.
    Pdf(Points),
    /// Income at each population share.
    Quantile(Points),
    /// Cumulative income share at each population share.
    Lorenz(Points),
    /// Draw incomes from the distribution.
    Sample {
        /// The number of incomes to draw.
        #[arg(short = 'n', long, default_value = "1000")]
        sample_size: usize,

        /// Seed for a reproducible draw.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args, Clone)]
pub struct Points {
    #[arg(required = true, allow_negative_numbers = true)]
    pub x: Vec<f64>,
}
