use games::{ParityGame, Player, VertexId};

use super::{solve, PromotionSolver};
use crate::test::{game, verify, verify_winning, winners};

#[test]
fn empty_game_is_trivially_solved() {
    let game = ParityGame::new();
    let solution = solve(&game);
    assert!(solution.is_solved());
}

#[test]
fn even_self_loop() {
    // A single vertex of priority 4 owned by player 0, looping forever.
    let game = game(&[(4, Player::P0, &[0])]);
    let solution = solve(&game);

    assert!(solution.is_solved());
    assert_eq!(solution.winner(VertexId(0)), Player::P0);
    assert_eq!(solution.strategy(VertexId(0)), VertexId(0));
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn odd_self_loop() {
    let game = game(&[(3, Player::P1, &[0])]);
    let solution = solve(&game);

    assert_eq!(solution.winner(VertexId(0)), Player::P1);
    assert_eq!(solution.strategy(VertexId(0)), VertexId(0));
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn forced_two_cycle() {
    // Both vertices cycle forever; the dominant priority 1 hands the cycle
    // to player 1. Only vertex 0 is owned by its winner, so only it gets a
    // strategy.
    let game = game(&[(0, Player::P1, &[1]), (1, Player::P0, &[0])]);
    let solution = solve(&game);

    assert_eq!(winners(&game, &solution), [Player::P1, Player::P1]);
    assert_eq!(solution.strategy(VertexId(0)), VertexId(1));
    assert!(!solution.has_strategy(VertexId(1)));
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn branching_escape() {
    // Vertex 0 may flee the even priority 2 into the odd self loop at 1, so
    // player 1 takes 0 and 1 while the even self loop at 2 stays with
    // player 0.
    let game = game(&[
        (2, Player::P1, &[1, 2]),
        (3, Player::P0, &[1]),
        (0, Player::P0, &[2]),
    ]);
    let solution = solve(&game);

    assert_eq!(winners(&game, &solution), [Player::P1, Player::P1, Player::P0]);
    assert_eq!(solution.strategy(VertexId(0)), VertexId(1));
    assert!(!solution.has_strategy(VertexId(1)));
    assert_eq!(solution.strategy(VertexId(2)), VertexId(2));
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn closed_region_promotes_before_winning() {
    // The region at priority 1 closes around {1, 2}, but vertex 2 can still
    // flee upwards to the open region at priority 3. Promoting 1 into 3
    // completes the dominion of player 1.
    let game = game(&[
        (3, Player::P1, &[1]),
        (1, Player::P1, &[2]),
        (0, Player::P0, &[1, 0]),
    ]);

    let mut solver = PromotionSolver::new();
    let solution = solver.solve(&game);

    assert_eq!(winners(&game, &solution), [Player::P1; 3]);
    assert_eq!(solver.promotions(), 1);
    assert_eq!(solver.dominions(), 1);
    assert_eq!(solution.strategy(VertexId(0)), VertexId(1));
    assert_eq!(solution.strategy(VertexId(1)), VertexId(2));
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn dominions_restart_the_scan() {
    // Two independent components: the promotion chain above on {0, 1, 2}
    // and a branching escape on {3, 4, 5}. Their priorities interleave, so
    // the blocks at priority 3 and 0 mix vertices of both components and
    // the first dominion forces a full rescan before the second is found.
    let game = game(&[
        (3, Player::P1, &[1]),
        (1, Player::P1, &[2]),
        (0, Player::P0, &[1, 0]),
        (2, Player::P1, &[4, 5]),
        (3, Player::P0, &[4]),
        (0, Player::P0, &[5]),
    ]);

    let mut solver = PromotionSolver::new();
    let solution = solver.solve(&game);

    let expected = [Player::P1, Player::P1, Player::P1, Player::P1, Player::P1, Player::P0];
    assert_eq!(winners(&game, &solution), expected);
    assert_eq!(solver.dominions(), 2);
    verify(&game, &solution);
    verify_winning(&game, &solution);
}

#[test]
fn winners_are_deterministic() {
    let game = game(&[
        (3, Player::P1, &[1]),
        (1, Player::P1, &[2]),
        (0, Player::P0, &[1, 0]),
        (2, Player::P1, &[4, 5]),
        (3, Player::P0, &[4]),
        (0, Player::P0, &[5, 2]),
    ]);

    let first = solve(&game);
    let second = solve(&game);
    assert_eq!(winners(&game, &first), winners(&game, &second));
}

#[test]
fn solver_instance_is_reusable() {
    let mut solver = PromotionSolver::new();

    let even = game(&[(4, Player::P0, &[0])]);
    let solution = solver.solve(&even);
    assert_eq!(solution.winner(VertexId(0)), Player::P0);

    let odd = game(&[(0, Player::P1, &[1]), (1, Player::P0, &[0])]);
    let solution = solver.solve(&odd);
    assert_eq!(winners(&odd, &solution), [Player::P1, Player::P1]);
    verify(&odd, &solution);
}
