use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verbena_config::FlowDef;
use verbena_execution::{AlgorithmRegistry, Execution, ExecutionContext};
use verbena_flow::PresentableNode;
use verbena_resolver::Resolver;
use verbena_store::{MemoryStore, Store};

/// Verbena - a learning-flow execution engine
#[derive(Parser)]
#[command(name = "verbena")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate a flow file (structure and conditional-edge disjointness)
  Validate {
    /// Path to the flow file (JSON)
    flow_file: PathBuf,
  },

  /// Traverse a flow interactively from the terminal
  Run {
    /// Path to the flow file (JSON)
    flow_file: PathBuf,

    /// Distribution algorithm (defaults to the one recorded on the flow)
    #[arg(long)]
    algorithm: Option<String>,

    /// Seed for entry-node selection, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Validate { flow_file }) => validate(&flow_file),
    Some(Commands::Run {
      flow_file,
      algorithm,
      seed,
    }) => run(flow_file, algorithm, seed),
    None => {
      println!("verbena - use --help to see available commands");
      Ok(())
    }
  }
}

fn load_flow_def(flow_file: &Path) -> Result<FlowDef> {
  let content = std::fs::read_to_string(flow_file)
    .with_context(|| format!("failed to read flow file: {}", flow_file.display()))?;

  serde_json::from_str(&content)
    .with_context(|| format!("failed to parse flow file: {}", flow_file.display()))
}

fn validate(flow_file: &Path) -> Result<()> {
  let def = load_flow_def(flow_file)?;
  let resolver = Resolver::new();

  resolver.validate(&def).context("flow failed validation")?;

  if def.is_materialized() {
    let flow = resolver.lock(def).context("failed to lock flow")?;
    eprintln!(
      "ok: {} nodes, {} edges, algorithm '{}'",
      flow.nodes.len(),
      flow.edges.len(),
      flow.algorithm
    );
  } else {
    eprintln!("ok: partial submission, semantic validation skipped");
  }

  Ok(())
}

fn run(flow_file: PathBuf, algorithm: Option<String>, seed: Option<u64>) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run_async(flow_file, algorithm, seed).await })
}

async fn run_async(flow_file: PathBuf, algorithm: Option<String>, seed: Option<u64>) -> Result<()> {
  let def = load_flow_def(&flow_file)?;
  let flow_id = def.flow_id.clone();

  // Go through the storage boundary the way a request handler would.
  let store = MemoryStore::new();
  store.put_flow(&def).await?;
  let def = store.get_flow(&flow_id).await?;

  let flow = Resolver::new().lock(def).context("failed to lock flow")?;
  let algorithm = algorithm.unwrap_or_else(|| flow.algorithm.clone());
  let registry = AlgorithmRegistry::builtin();

  eprintln!(
    "Loaded flow '{}' with {} nodes (algorithm: {})",
    flow.title,
    flow.nodes.len(),
    algorithm
  );

  // First exercise: fresh context, entry node chosen at random.
  let placeholder = ExecutionContext::create(&flow.flow_id, "", None, None);
  let mut execution = Execution::new(placeholder, &algorithm, flow.clone(), &registry)
    .context("failed to construct execution")?;
  if let Some(seed) = seed {
    execution = execution.with_seed(seed);
  }

  let step = execution.get_first_exercise(None, None)?;
  store.put_context(&step.ctx).await?;
  let session_id = step.ctx.session_id.clone();
  let mut current = step.node;

  let stdin = io::stdin();
  while let Some(node) = current {
    print_node(&node)?;

    let satisfied = read_satisfied_edges(&stdin, &node)?;

    // Reconstruct the orchestrator from the stored context, as the next
    // request would.
    let ctx = store.get_context(&session_id).await?;
    let mut execution = Execution::new(ctx, &algorithm, flow.clone(), &registry)?;
    let step = execution.get_next_exercise(&satisfied, &session_id)?;
    store.put_context(&step.ctx).await?;
    current = step.node;
  }

  eprintln!("Flow completed.");
  Ok(())
}

fn print_node(node: &PresentableNode) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(node)?);
  Ok(())
}

fn read_satisfied_edges(stdin: &io::Stdin, node: &PresentableNode) -> Result<Vec<String>> {
  if node.validation.is_empty() {
    // Nothing to choose; the next step will report completion.
    return Ok(Vec::new());
  }

  eprintln!("satisfied edge ids (comma-separated, empty to finish):");
  let mut line = String::new();
  stdin
    .lock()
    .read_line(&mut line)
    .context("failed to read satisfied edges from stdin")?;

  Ok(
    line
      .trim()
      .split(',')
      .map(str::trim)
      .filter(|s| !s.is_empty())
      .map(str::to_string)
      .collect(),
  )
}
