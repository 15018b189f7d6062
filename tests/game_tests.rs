use battleship_net::{
    AttackResult, DamagePolicy, Game, GameConfig, GameError, HitInfo, HitResponse, Orientation,
    Slot, CELL_HIT, CELL_MISS, CELL_UNREVEALED,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn slot(x: usize, y: usize, orientation: Orientation) -> Slot {
    Slot { x, y, orientation }
}

fn hit_info(x: i64, y: i64, result: AttackResult) -> HitInfo {
    HitInfo { x, y, result }
}

/// Standard fleet laid out by hand, leaving (0,0) empty.
fn standard_layout(policy: DamagePolicy) -> Game {
    Game::with_layout(
        10,
        &[
            (5, slot(1, 1, Orientation::Horizontal)),
            (4, slot(0, 3, Orientation::Vertical)),
            (3, slot(5, 5, Orientation::Horizontal)),
            (3, slot(9, 0, Orientation::Vertical)),
            (2, slot(3, 8, Orientation::Horizontal)),
        ],
        policy,
    )
    .unwrap()
}

#[test]
fn test_standard_game_starts_with_five_boats() {
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let game = Game::with_rng(&GameConfig::default(), &mut rng).unwrap();
        assert_eq!(game.remaining_boats(), 5);
        assert!(game.is_alive());
        assert_eq!(game.board_size(), 10);
        assert!(game.received_hits().is_empty());
    }
}

#[test]
fn test_thread_rng_game_builds() {
    let game = Game::new(&GameConfig::default()).unwrap();
    assert_eq!(game.remaining_boats(), 5);
    let cells: usize = game.boats().iter().map(|b| b.size()).sum();
    assert_eq!(cells, 17);
}

#[test]
fn test_repeat_miss_is_logged_twice() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    let expected = HitResponse {
        result: AttackResult::Miss,
        x: 0,
        y: 0,
    };
    assert_eq!(game.process_attack(0, 0), expected);
    assert_eq!(game.process_attack(0, 0), expected);
    assert_eq!(
        game.received_hits(),
        vec![
            hit_info(0, 0, AttackResult::Miss),
            hit_info(0, 0, AttackResult::Miss),
        ]
    );
}

#[test]
fn test_out_of_bounds_attack_is_invalid() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    assert_eq!(
        game.process_attack(-1, 0),
        HitResponse {
            result: AttackResult::Invalid,
            x: -1,
            y: 0,
        }
    );
    assert_eq!(game.process_attack(10, 3).result, AttackResult::Invalid);
    assert_eq!(game.process_attack(3, 10).result, AttackResult::Invalid);
    assert!(game.received_hits().is_empty());
    let view = game.board_view();
    assert!(view.cells.iter().flatten().all(|&c| c == CELL_UNREVEALED));
}

#[test]
fn test_sinking_two_cell_boat() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    assert_eq!(game.remaining_boats(), 5);
    assert_eq!(game.process_attack(3, 8).result, AttackResult::Hit);
    assert_eq!(game.remaining_boats(), 5);
    assert_eq!(game.process_attack(4, 8).result, AttackResult::Hit);
    assert_eq!(game.remaining_boats(), 4);
    assert!(!game.boats()[4].is_afloat());
}

#[test]
fn test_board_view_reports_hits_and_misses() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    game.process_attack(1, 1);
    game.process_attack(0, 0);
    let view = game.board_view();
    assert_eq!(view.size, 10);
    assert_eq!(view.cells.len(), 10);
    assert!(view.cells.iter().all(|row| row.len() == 10));
    // rows are indexed by y, columns by x
    assert_eq!(view.cells[1][1], CELL_HIT);
    assert_eq!(view.cells[0][0], CELL_MISS);
    // (2,1) holds the carrier but was never attacked
    assert_eq!(view.cells[1][2], CELL_UNREVEALED);
}

#[test]
fn test_vertical_hit_uses_y_as_row() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    assert_eq!(game.process_attack(9, 2).result, AttackResult::Hit);
    assert_eq!(game.board_view().cells[2][9], CELL_HIT);
    assert_eq!(game.process_attack(2, 9).result, AttackResult::Miss);
}

#[test]
fn test_every_attack_policy_counts_repeats() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    assert_eq!(game.damage_policy(), DamagePolicy::EveryAttack);
    // hammering one cell of the two-cell boat sinks it
    assert_eq!(game.process_attack(3, 8).result, AttackResult::Hit);
    assert_eq!(game.process_attack(3, 8).result, AttackResult::Hit);
    assert_eq!(game.remaining_boats(), 4);
    assert_eq!(game.boats()[4].hit_count(), 2);
    assert_eq!(game.received_hits().len(), 2);
}

#[test]
fn test_distinct_cells_policy_ignores_repeats() {
    let game = standard_layout(DamagePolicy::DistinctCells);
    assert_eq!(game.process_attack(3, 8).result, AttackResult::Hit);
    assert_eq!(game.process_attack(3, 8).result, AttackResult::Hit);
    assert_eq!(game.remaining_boats(), 5);
    assert_eq!(game.boats()[4].hit_count(), 1);
    // repeats are still logged
    assert_eq!(game.received_hits().len(), 2);
    game.process_attack(4, 8);
    assert_eq!(game.remaining_boats(), 4);
}

#[test]
fn test_attacks_after_defeat_are_still_processed() {
    let game = Game::with_layout(
        3,
        &[(1, slot(1, 1, Orientation::Horizontal))],
        DamagePolicy::default(),
    )
    .unwrap();
    assert_eq!(game.process_attack(1, 1).result, AttackResult::Hit);
    assert!(!game.is_alive());
    assert_eq!(game.process_attack(0, 0).result, AttackResult::Miss);
    assert_eq!(game.process_attack(1, 1).result, AttackResult::Hit);
    assert_eq!(game.received_hits().len(), 3);
    assert_eq!(game.remaining_boats(), 0);
}

#[test]
fn test_received_hits_is_a_snapshot() {
    let game = standard_layout(DamagePolicy::EveryAttack);
    game.process_attack(0, 0);
    let snapshot = game.received_hits();
    game.process_attack(1, 1);
    assert_eq!(snapshot.len(), 1);
    assert_eq!(game.received_hits().len(), 2);
}

#[test]
fn test_layout_errors() {
    let policy = DamagePolicy::default();
    assert_eq!(
        Game::with_layout(0, &[], policy).err(),
        Some(GameError::InvalidBoardSize)
    );
    assert_eq!(
        Game::with_layout(5, &[(3, slot(3, 0, Orientation::Horizontal))], policy).err(),
        Some(GameError::BoatOutOfBounds { id: 0 })
    );
    assert_eq!(
        Game::with_layout(
            5,
            &[
                (3, slot(0, 0, Orientation::Horizontal)),
                (2, slot(1, 0, Orientation::Vertical)),
            ],
            policy
        )
        .err(),
        Some(GameError::BoatOverlaps { id: 1 })
    );
    assert_eq!(
        Game::with_layout(5, &[(0, slot(0, 0, Orientation::Horizontal))], policy).err(),
        Some(GameError::InvalidBoatSize { id: 0 })
    );
    // anchors whose far end overflows are off the board, not a panic
    for far in [
        slot(usize::MAX, 0, Orientation::Horizontal),
        slot(0, usize::MAX, Orientation::Vertical),
    ] {
        assert_eq!(
            Game::with_layout(5, &[(2, far)], policy).err(),
            Some(GameError::BoatOutOfBounds { id: 0 })
        );
    }
    assert_eq!(
        Game::with_layout(
            5,
            &[
                (2, slot(0, 0, Orientation::Horizontal)),
                (3, slot(usize::MAX - 1, 4, Orientation::Horizontal)),
            ],
            policy
        )
        .err(),
        Some(GameError::BoatOutOfBounds { id: 1 })
    );
}

#[test]
fn test_unplaceable_config_is_an_error() {
    let mut rng = SmallRng::seed_from_u64(3);
    let config = GameConfig::new(3, vec![3, 3, 3, 1]);
    assert_eq!(
        Game::with_rng(&config, &mut rng).err(),
        Some(GameError::UnableToPlaceBoat { id: 3, size: 1 })
    );
    let config = GameConfig::new(0, vec![1]);
    assert_eq!(
        Game::with_rng(&config, &mut rng).err(),
        Some(GameError::InvalidBoardSize)
    );
}

#[test]
fn test_same_seed_same_layout() {
    let config = GameConfig::default();
    let a = Game::with_rng(&config, &mut SmallRng::seed_from_u64(42)).unwrap();
    let b = Game::with_rng(&config, &mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a.boats(), b.boats());
}

#[test]
fn test_debug_render_shows_boats_and_shots() {
    let game = Game::with_layout(
        3,
        &[(2, slot(0, 0, Orientation::Horizontal))],
        DamagePolicy::default(),
    )
    .unwrap();
    game.process_attack(0, 0);
    game.process_attack(2, 2);
    let text = game.debug_render();
    let rows: Vec<&str> = text.lines().skip(1).take(3).collect();
    assert_eq!(rows[0].split_whitespace().collect::<Vec<_>>(), ["0", "X", "B", "~"]);
    assert_eq!(rows[2].split_whitespace().collect::<Vec<_>>(), ["2", "~", "~", "o"]);
    assert!(text.contains("#0 size=2 at=(0, 0) Horizontal hits=1/2"));
}
