use anyhow::{Context, Result};
use arborist::{
    build_from_postorder_inorder, build_from_preorder_inorder, first_violation,
    flatten_to_right_chain, lowest_common_ancestor, minimum_burn_time, nodes_at_distance,
    satisfies_children_sum, threaded_inorder, Codec, CodecConfig, Tree,
};
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "arborist", about = "Binary-tree reconstruction, codecs and queries")]
struct Cli {
    #[command(flatten)]
    format: FormatArgs,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Token layout for trees read from and written to the command line.
#[derive(Args, Debug)]
struct FormatArgs {
    /// Separator between tokens.
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,
    /// Token for an absent child.
    #[arg(long, global = true, default_value = "N")]
    marker: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rebuild a tree from inorder plus preorder or postorder values.
    Build {
        /// Inorder values, comma separated.
        #[arg(long, value_delimiter = ',', required = true)]
        inorder: Vec<i64>,
        /// Preorder values, comma separated.
        #[arg(long, value_delimiter = ',', conflicts_with = "postorder")]
        preorder: Option<Vec<i64>>,
        /// Postorder values, comma separated.
        #[arg(long, value_delimiter = ',')]
        postorder: Option<Vec<i64>>,
    },
    /// Print the lowest common ancestor of two values.
    Lca {
        /// Tree in preorder-with-markers form.
        tree: String,
        a: i64,
        b: i64,
    },
    /// Print all values exactly K hops from SOURCE.
    Distance {
        /// Tree in preorder-with-markers form.
        tree: String,
        source: i64,
        k: usize,
    },
    /// Print how long fire takes to spread from SOURCE to every node.
    Burn {
        /// Tree in preorder-with-markers form.
        tree: String,
        source: i64,
    },
    /// Check the children-sum property.
    Check {
        /// Tree in preorder-with-markers form.
        tree: String,
    },
    /// Flatten to a right chain and print the result.
    Flatten {
        /// Tree in preorder-with-markers form.
        tree: String,
    },
    /// Print inorder values using a threaded (stackless) walk.
    Inorder {
        /// Tree in preorder-with-markers form.
        tree: String,
    },
    /// Re-encode a tree in breadth-first form.
    Levels {
        /// Tree in preorder-with-markers form.
        tree: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let codec = Codec::new(
        CodecConfig::default()
            .with_delimiter(cli.format.delimiter)
            .with_null_marker(cli.format.marker.as_str()),
    )
    .context("invalid --delimiter/--marker combination")?;
    debug!(config = ?codec.config(), "codec configured");

    match cli.command {
        Commands::Build {
            inorder,
            preorder,
            postorder,
        } => run_build(&codec, inorder, preorder, postorder)?,
        Commands::Lca { tree, a, b } => {
            let tree = parse_tree(&codec, &tree)?;
            let lca = lowest_common_ancestor(&tree, &a, &b)
                .with_context(|| format!("cannot resolve LCA of {} and {}", a, b))?;
            println!("{}", tree.value(lca));
        }
        Commands::Distance { tree, source, k } => {
            let tree = parse_tree(&codec, &tree)?;
            let mut values = nodes_at_distance(&tree, &source, k)
                .with_context(|| format!("distance query from {} failed", source))?;
            values.sort_unstable();
            println!("{}", join(&values, codec.config().delimiter));
        }
        Commands::Burn { tree, source } => {
            let tree = parse_tree(&codec, &tree)?;
            let minutes = minimum_burn_time(&tree, &source)
                .with_context(|| format!("burn simulation from {} failed", source))?;
            println!("{}", minutes);
        }
        Commands::Check { tree } => {
            let tree = parse_tree(&codec, &tree)?;
            if satisfies_children_sum(&tree) {
                println!("children-sum property holds");
            } else if let Some(bad) = first_violation(&tree) {
                println!(
                    "children-sum property violated at node {}",
                    tree.value(bad)
                );
            }
        }
        Commands::Flatten { tree } => {
            let mut tree = parse_tree(&codec, &tree)?;
            flatten_to_right_chain(&mut tree);
            println!("{}", codec.serialize(&tree));
        }
        Commands::Inorder { tree } => {
            let mut tree = parse_tree(&codec, &tree)?;
            let values = threaded_inorder(&mut tree);
            println!("{}", join(&values, codec.config().delimiter));
        }
        Commands::Levels { tree } => {
            let tree = parse_tree(&codec, &tree)?;
            println!("{}", codec.serialize_level_order(&tree));
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_build(
    codec: &Codec,
    inorder: Vec<i64>,
    preorder: Option<Vec<i64>>,
    postorder: Option<Vec<i64>>,
) -> Result<()> {
    let tree = match (preorder, postorder) {
        (Some(preorder), _) => build_from_preorder_inorder(&preorder, &inorder)
            .context("preorder/inorder reconstruction failed")?,
        (None, Some(postorder)) => build_from_postorder_inorder(&postorder, &inorder)
            .context("postorder/inorder reconstruction failed")?,
        (None, None) => anyhow::bail!("one of --preorder or --postorder is required"),
    };

    println!("{}", codec.serialize(&tree));
    Ok(())
}

fn parse_tree(codec: &Codec, text: &str) -> Result<Tree<i64>> {
    codec
        .deserialize(text)
        .with_context(|| format!("failed to decode tree '{}'", text))
}

fn join(values: &[i64], delimiter: char) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}
