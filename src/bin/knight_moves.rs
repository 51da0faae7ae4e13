use clap::Parser;
use log::{error, info};

use knight_path::graph::BoardGraph;
use knight_path::square::Square;

#[derive(Parser, Debug)]
#[command(name = "knight_moves")]
#[command(about = "Shortest knight path between two squares of an 8x8 board")]
struct Args {
    /// Start square as `file,rank`, each in 0..=7.
    #[arg(default_value = "0,0")]
    from: Square,

    /// Target square as `file,rank`, each in 0..=7.
    #[arg(default_value = "5,4")]
    to: Square,

    /// Print the adjacency matrix and vertex table before searching.
    #[arg(long)]
    dump_graph: bool,

    /// Print every square in BFS visitation order from the start square.
    #[arg(long)]
    traverse: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    info!("query: {} -> {}", args.from, args.to);

    let graph = BoardGraph::build();

    if args.dump_graph {
        println!("{}", graph.render_adjacency());
    }

    if args.traverse {
        match graph.traversal_order(args.from) {
            Ok(order) => {
                println!("Visit order from {}:", args.from);
                for sq in order {
                    println!("{sq}");
                }
                println!();
            }
            Err(e) => {
                error!("traversal failed: {e}");
                eprintln!("Traversal failed: {e}");
                std::process::exit(1);
            }
        }
    }

    let path = match graph.knight_moves(args.from, args.to) {
        Ok(p) => p,
        Err(e) => {
            error!("query failed: {e}");
            eprintln!("No path: {e}");
            std::process::exit(1);
        }
    };

    println!("You've made it in {} moves", path.moves());
    println!("Here's your path:");
    for sq in path.squares() {
        println!("{sq}");
    }
}
