use parity::{build_game, parse_game, write_solution};

fn main() {
    env_logger::init();

    let path = std::env::args().nth(1).expect("No parity game file provided");
    let algorithm = std::env::args().nth(2).unwrap_or_else(|| "pp".to_string());

    let now = std::time::Instant::now();

    let file = std::fs::read_to_string(path).expect("Failed to read parity game file");
    let rows = parse_game(&file).expect("Failed to parse parity game file");
    let (game, _) = build_game(&rows).expect("Invalid parity game");

    println!("Preprocessing took {:?}", now.elapsed());

    let now = std::time::Instant::now();

    let solution = match algorithm.as_str() {
        "pp" => solver::promotion::solve(&game),
        "recursive" => solver::recursive::solve(&game),
        "buchi" => solver::buchi::solve(&game),
        "reachability" => solver::reachability::solve(&game),
        other => panic!("Unknown solver '{other}'"),
    };

    println!("Solve took {:?}", now.elapsed());

    if !solution.is_solved() {
        eprintln!("The game could not be solved");
        std::process::exit(1);
    }

    print!("{}", write_solution(&rows, &solution));
}
