use std::path::PathBuf;

use arbnum::{config::ArithmeticConfig, expr::RationalExpression};
use arbsearch::{
    config::SearchConfig,
    inference::Neuron,
    qap::QapInstance,
    subset::{SubsetProblem, SubsetSearch},
    utils::error::SearchResult,
};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

#[derive(Parser)]
#[command(about = "Exact rational expression demos")]
pub struct Arguments {
    /// Search configuration (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add and multiply two expressions and compare them
    Arith {
        /// Left operand, e.g. "1*(1/3) + 1*(1/2)"
        #[arg(long)]
        lhs: Option<String>,
        /// Right operand
        #[arg(long)]
        rhs: Option<String>,
    },
    /// Search subsets of weights summing to a target
    SubsetSum {
        /// Problem file with `items` and `target`
        #[arg(long)]
        problem: Option<PathBuf>,
    },
    /// Select weighted features whose weights sum to one
    FeatureSelection,
    /// Solve a small quadratic assignment instance exactly
    Qap {
        #[arg(long, value_enum, default_value_t = Instance::Basic)]
        instance: Instance,
        /// Problem file with `flow` and `distance`; overrides `--instance`
        #[arg(long)]
        problem: Option<PathBuf>,
    },
    /// Evaluate a three-input node with symbolic weights
    Inference,
    /// Print the step-by-step contributions of a two-input node
    Explain,
}

#[derive(Clone, Copy, ValueEnum)]
enum Instance {
    Basic,
    Symbolic,
}

fn single(coefficient: i64, numerator: i64, denominator: i64) -> SearchResult<RationalExpression> {
    Ok(RationalExpression::from_term(coefficient, numerator, denominator)?)
}

fn default_operands() -> SearchResult<(RationalExpression, RationalExpression)> {
    let mut x = single(1, 1, 3)?;
    x.push_term(1, 1, 2)?;
    Ok((x, single(1, 5, 6)?))
}

fn arith(lhs: Option<String>, rhs: Option<String>, config: &SearchConfig) -> SearchResult<()> {
    let (default_lhs, default_rhs) = default_operands()?;
    let x = match lhs {
        Some(text) => text.parse::<RationalExpression>()?,
        None => default_lhs,
    };
    let y = match rhs {
        Some(text) => text.parse::<RationalExpression>()?,
        None => default_rhs,
    };

    println!("x = {}", x);
    println!("y = {}", y);
    println!("x + y = {}", &x + &y);
    println!("x * y = {}", x.multiply(&y, config.arithmetic.overflow)?);
    println!("x == y (terms): {}", x == y);
    println!("x == y (value): {}", x.value_eq(&y));
    println!("value(x) = {}, value(y) = {}", x.exact_value(), y.exact_value());
    println!("reduced(x) = {}", x.reduced());
    Ok(())
}

fn subset_sum(problem: Option<PathBuf>, config: &SearchConfig) -> SearchResult<()> {
    let problem = match problem {
        Some(path) => SubsetProblem::from_path(path)?,
        None => SubsetProblem::new(
            vec![single(1, 1, 3)?, single(1, 1, 2)?, single(1, 1, 6)?, single(1, 1, 4)?],
            single(1, 1, 1)?,
        ),
    };

    let search = SubsetSearch::with_config(&problem, config)?;
    let found = search.for_each_match(|m| println!("subset {:?}: {}", m.indices, m.sum))?;
    println!("{} subset(s) match `{}` ({} matching)", found, problem.target, search.mode().to_str());
    Ok(())
}

fn feature_selection(config: &SearchConfig) -> SearchResult<()> {
    let weights = [(1, 5), (2, 7), (1, 3), (3, 10), (5, 20), (7, 14)];
    let items = weights
        .iter()
        .map(|&(a, b)| single(1, a, b))
        .collect::<SearchResult<Vec<_>>>()?;
    let problem = SubsetProblem::new(items, single(1, 1, 1)?);

    let search = SubsetSearch::with_config(&problem, config)?;
    for selection in search.solutions()? {
        let features = selection
            .indices
            .iter()
            .map(|i| format!("feature {}", i + 1))
            .collect::<Vec<_>>();
        println!("{}: {}", features.join(", "), selection.sum);
    }
    Ok(())
}

fn builtin_instance(instance: Instance) -> SearchResult<QapInstance> {
    match instance {
        Instance::Basic => QapInstance::from_fractions(
            [[1, 1, 1], [1, 1, 1], [1, 1, 1]],
            [[2, 3, 4], [3, 5, 6], [4, 6, 7]],
            [[2, 1, 1], [1, 1, 1], [1, 1, 1]],
            [[3, 4, 5], [4, 2, 3], [5, 3, 7]],
        ),
        Instance::Symbolic => QapInstance::from_fractions(
            [[17, 5, 3], [5, 0, 11], [3, 11, 0]],
            [[23, 13, 19], [13, 1, 29], [19, 29, 1]],
            [[2, 7, 13], [7, 0, 17], [13, 17, 0]],
            [[5, 31, 41], [31, 1, 61], [41, 61, 1]],
        ),
    }
}

fn qap(instance: Instance, problem: Option<PathBuf>, config: &SearchConfig) -> SearchResult<()> {
    let instance = match problem {
        Some(path) => QapInstance::from_path(path)?,
        None => builtin_instance(instance)?,
    };

    let solution = instance.solve(config)?;
    println!("best permutation: {:?}", solution.permutation.as_slice());
    println!("cost: {}", solution.cost);
    println!("cost value: {}", solution.cost.exact_value());
    println!("evaluated: {}", solution.evaluated);
    Ok(())
}

fn inference(arithmetic: &ArithmeticConfig) -> SearchResult<()> {
    let neuron = Neuron::new(
        vec![single(1, 1, 3)?, single(-1, 2, 5)?, single(1, 7, 8)?],
        single(1, 1, 6)?,
    );
    let trace = neuron.forward(&[1, 2, 3], arithmetic)?;
    println!("output = {}", trace.output);
    println!("value = {}", trace.output.exact_value());
    Ok(())
}

fn explain(arithmetic: &ArithmeticConfig) -> SearchResult<()> {
    let neuron = Neuron::new(vec![single(1, 2, 5)?, single(1, 1, 2)?], single(1, 1, 10)?);
    println!("{}", neuron.forward(&[1, 1], arithmetic)?);
    Ok(())
}

fn run(args: Arguments) -> SearchResult<()> {
    let config = match &args.config {
        Some(path) => SearchConfig::from_path(path)?,
        None => SearchConfig::default(),
    };
    info!("Using configuration {:?}", config);

    match args.command {
        Command::Arith { lhs, rhs } => arith(lhs, rhs, &config),
        Command::SubsetSum { problem } => subset_sum(problem, &config),
        Command::FeatureSelection => feature_selection(&config),
        Command::Qap { instance, problem } => qap(instance, problem, &config),
        Command::Inference => inference(&config.arithmetic),
        Command::Explain => explain(&config.arithmetic),
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default())
        .format_timestamp(None)
        .format_module_path(false)
        .init();

    let args = Arguments::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
