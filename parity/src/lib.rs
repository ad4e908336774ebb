mod conv;
mod parser;
mod sol;


pub use conv::build_game;
pub use parser::parse_game;
pub use sol::write_solution;

use games::Player;

/// One vertex declaration of a game file, before id remapping.
#[derive(Debug)]
pub struct RawVertex {
    pub id: usize,
    pub priority: usize,
    pub player: Player,
    pub successors: Vec<usize>,
    pub name: Option<String>,
}
