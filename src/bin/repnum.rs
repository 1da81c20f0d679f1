use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use repnum::{Complex, ComplexNumber, Rational};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// repnum adds and multiplies complex numbers in mixed representations,
/// and does plain fraction arithmetic without reduction.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Combine two complex numbers, e.g. `complex mul rect 1 2 polar 2 0.5`.
    ///
    /// A rectangular number is given as `re im`, a polar one as `magnitude angle` (radians).
    /// The left hand side decides the representation of the result.
    #[command(allow_negative_numbers = true)]
    Complex {
        op: ComplexOp,
        lhs_form: Form,
        lhs_a: f64,
        lhs_b: f64,
        rhs_form: Form,
        rhs_a: f64,
        rhs_b: f64,
        /// Fractional digits of the output.
        #[arg(short, long, default_value_t = repnum::DEFAULT_PRECISION)]
        precision: usize,
        /// Also print all four coordinates of the result.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Combine two fractions `n1/d1` and `n2/d2`. The result is never reduced.
    #[command(allow_negative_numbers = true)]
    Rational {
        op: RationalOp,
        n1: i64,
        d1: i64,
        n2: i64,
        d2: i64,
        /// Fail on integer overflow instead of wrapping around.
        #[arg(long)]
        checked: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ComplexOp {
    Add,
    Mul,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RationalOp {
    Add,
    Sub,
    Mul,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Form {
    Rect,
    Polar,
}

impl Form {
    fn complex(self, a: f64, b: f64) -> Complex {
        match self {
            Form::Rect => Complex::rectangular(a, b),
            Form::Polar => Complex::polar(a, b),
        }
    }
}

fn main() -> ExitCode {
    // Logs go to stderr, the results to stdout.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Complex {
            op,
            lhs_form,
            lhs_a,
            lhs_b,
            rhs_form,
            rhs_a,
            rhs_b,
            precision,
            verbose,
        } => {
            let lhs = lhs_form.complex(lhs_a, lhs_b);
            let rhs = rhs_form.complex(rhs_a, rhs_b);
            info!(?op, %lhs, %rhs, "complex");
            let result = match op {
                ComplexOp::Add => lhs + rhs,
                ComplexOp::Mul => lhs * rhs,
            };
            debug!(polar = result.is_polar(), "result representation");
            println!("{result:.precision$}");
            if verbose {
                println!("real      {:.precision$}", result.real());
                println!("imag      {:.precision$}", result.imag());
                println!("magnitude {:.precision$}", result.magnitude());
                println!("angle     {:.precision$}", result.angle());
            }
            ExitCode::SUCCESS
        }
        Commands::Rational {
            op,
            n1,
            d1,
            n2,
            d2,
            checked,
        } => {
            let lhs = Rational::new(n1, d1);
            let rhs = Rational::new(n2, d2);
            info!(?op, %lhs, %rhs, checked, "rational");
            let result = if checked {
                match op {
                    RationalOp::Add => lhs.checked_add(&rhs),
                    RationalOp::Sub => lhs.checked_sub(&rhs),
                    RationalOp::Mul => lhs.checked_mul(&rhs),
                }
            } else {
                Ok(match op {
                    RationalOp::Add => lhs + rhs,
                    RationalOp::Sub => lhs - rhs,
                    RationalOp::Mul => lhs * rhs,
                })
            };
            match result {
                Ok(r) => {
                    r.print_rat();
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
