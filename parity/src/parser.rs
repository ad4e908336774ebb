use chumsky::error::Simple;
use chumsky::primitive::{choice, end, just, none_of};
use chumsky::text::{self, TextParser};
use chumsky::Parser;
use games::Player;

use crate::RawVertex;

// game   ::=  'parity' max_id ';' row*
// row    ::=  id priority player successors name? ';'
// succs  ::=  id (',' id)*
// name   ::=  '"' string '"'
pub fn parse_game(source: &str) -> Result<Vec<RawVertex>, Vec<Simple<char>>> {
    let number = text::int(10).map(|n: String| n.parse::<usize>().unwrap()).padded();
    let semi = just(';');
    let newline = text::newline();

    let header = just("parity").padded().then(number).then(semi).then(newline);

    let player = choice((just('0').to(Player::P0), just('1').to(Player::P1))).padded();
    let successors = number.separated_by(just(',').padded()).at_least(1);
    let name = none_of("\";").repeated().collect::<String>().delimited_by(just('"'), just('"'));

    let row = number.then(number).then(player).then(successors).then(name.or_not());
    let row = row.map(|((((id, priority), player), successors), name)| RawVertex {
        id,
        priority,
        player,
        successors,
        name,
    });

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let game = header.ignore_then(rows).then_ignore(text::whitespace()).then_ignore(end());

    game.parse(source)
}
