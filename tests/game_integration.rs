//! Full command-loop tests
//!
//! Drives `Game` through rolls, fights, the boss gate, items, and run
//! endings, checking the event stream a UI would narrate.

use dicebound::components::{BonusKind, Item, StatDeltas, StatusEffect};
use dicebound::core::config::GameConfig;
use dicebound::core::error::{GameError, Precondition};
use dicebound::core::types::EntityId;
use dicebound::game::{Command, Game, GameEvent};
use dicebound::loot::Rarity;
use dicebound::progression::{MetaState, UpgradeId};

fn fresh_game(seed: u64) -> Game {
    Game::new(GameConfig::default(), MetaState::new(), seed).unwrap()
}

/// Pumps the player far past anything the board can field, so scripted
/// rolls never end the run early.
fn overbuff(game: &mut Game) {
    let player = game.player_id();
    if let Some(stats) = game.world.stats.get_mut(player) {
        stats.max_hp = 1_000_000;
        stats.hp = 1_000_000;
        stats.damage = 1_000_000;
    }
}

#[test]
fn first_turn_reports_roll_then_movement() {
    let mut game = fresh_game(11);
    let events = game.handle(Command::RequestRoll).unwrap();

    let total = match &events[0] {
        GameEvent::RollResult {
            total,
            breakdown,
            modifier,
        } => {
            // The default character throws 2d6 flat.
            assert_eq!(breakdown.len(), 2);
            assert_eq!(*modifier, 0);
            assert!((2..=12).contains(total));
            *total
        }
        other => panic!("expected RollResult first, got {other:?}"),
    };
    match &events[1] {
        GameEvent::MovementResult { from, to, passed } => {
            assert_eq!(*from, 0);
            assert_eq!(*to, total as usize);
            assert_eq!(passed.len(), total as usize);
        }
        other => panic!("expected MovementResult second, got {other:?}"),
    }
    assert_eq!(game.run.round, 2);
}

#[test]
fn movement_accumulates_around_the_loop() {
    let mut game = fresh_game(29);
    overbuff(&mut game);
    let mut total_squares = 0usize;
    for _ in 0..6 {
        let events = game.handle(Command::RequestRoll).unwrap();
        for event in &events {
            if let GameEvent::RollResult { total, .. } = event {
                total_squares += *total as usize;
            }
            assert!(!matches!(event, GameEvent::RunEnded { .. }));
        }
    }
    let square = game.world.positions.get(game.player_id()).unwrap().square;
    assert_eq!(square, total_squares % 40);
    assert_eq!(game.run.round, 7);
}

#[test]
fn passing_start_pays_the_stipend() {
    let mut game = fresh_game(5);
    overbuff(&mut game);
    for _ in 0..30 {
        let gold_before = game.run.gold;
        let events = game.handle(Command::RequestRoll).unwrap();
        if let Some(GameEvent::PassedStart { gold }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::PassedStart { .. }))
        {
            assert_eq!(*gold, 20);
            assert!(game.run.gold >= gold_before + 20);
            return;
        }
    }
    panic!("thirty rolls never crossed the start square");
}

#[test]
fn boss_gate_blocks_early_dispatch() {
    let mut game = fresh_game(3);
    game.run.round = 15;
    match game.dispatch_boss().unwrap_err() {
        GameError::PreconditionNotMet(Precondition::BossNotYetAvailable {
            current,
            required,
        }) => {
            assert_eq!(current, 15);
            assert_eq!(required, 21);
        }
        other => panic!("expected the boss gate, got {other:?}"),
    }
    assert!(!game.is_run_over());
}

/// Landing on the boss square before the gate opens is a narrated no-op,
/// not an error. A tiny ring with a distant gate makes the square easy to
/// hit.
#[test]
fn landing_on_a_sealed_boss_square_just_narrates() {
    let config = GameConfig {
        board_size: 8,
        boss_unlock_round: 1000,
        ..GameConfig::default()
    };
    let mut game = Game::new(config, MetaState::new(), 41).unwrap();
    for _ in 0..200 {
        let events = game.handle(Command::RequestRoll).unwrap();
        if let Some(GameEvent::BossUnavailable { required, .. }) = events
            .iter()
            .find(|e| matches!(e, GameEvent::BossUnavailable { .. }))
        {
            assert_eq!(*required, 1001);
            assert!(!game.is_run_over());
            return;
        }
    }
    panic!("two hundred rolls never landed on the boss square");
}

#[test]
fn boss_victory_banks_the_run() {
    let mut game = fresh_game(8);
    overbuff(&mut game);
    game.run.round = 21;
    game.run.gold = 120;

    let events = game.dispatch_boss().unwrap();
    assert!(matches!(
        events[0],
        GameEvent::MonsterAppeared { tier: 6, .. }
    ));
    // The boss always drops an item, even though the run is ending.
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::ItemDropped { .. })));
    let ended = events.iter().find_map(|e| match e {
        GameEvent::RunEnded {
            victory,
            gold_banked,
            rounds_survived,
        } => Some((*victory, *gold_banked, *rounds_survived)),
        _ => None,
    });
    // 120 carried plus the 500 bounty.
    assert_eq!(ended, Some((true, 620, 21)));

    assert!(game.is_run_over());
    assert_eq!(game.meta.gold, 620);
    assert_eq!(game.meta.stats.boss_victories, 1);
    assert_eq!(game.meta.stats.total_runs, 1);

    let err = game.handle(Command::RequestRoll).unwrap_err();
    assert!(matches!(
        err,
        GameError::PreconditionNotMet(Precondition::RunOver)
    ));

    let events = game.handle(Command::RestartRun).unwrap();
    assert!(matches!(events[0], GameEvent::RunStarted { .. }));
    assert!(!game.is_run_over());
    assert_eq!(game.run.gold, 0);
    assert_eq!(game.run.round, 1);
    assert_eq!(game.meta.gold, 620);
}

#[test]
fn dying_to_the_boss_still_banks_the_run() {
    let mut game = fresh_game(13);
    game.run.round = 21;
    game.run.gold = 250;
    let player = game.player_id();
    game.world.stats.get_mut(player).unwrap().hp = 1;

    let events = game.dispatch_boss().unwrap();
    let ended = events.iter().find_map(|e| match e {
        GameEvent::RunEnded {
            victory,
            gold_banked,
            rounds_survived,
        } => Some((*victory, *gold_banked, *rounds_survived)),
        _ => None,
    });
    assert_eq!(ended, Some((false, 250, 21)));
    assert_eq!(game.meta.gold, 250);
    assert_eq!(game.meta.stats.total_runs, 1);
    assert_eq!(game.meta.stats.boss_victories, 0);
    assert_eq!(game.meta.stats.best_round, 21);
}

#[test]
fn restarting_mid_run_forfeits_run_gold() {
    let mut game = fresh_game(17);
    game.run.gold = 999;
    game.handle(Command::RestartRun).unwrap();
    assert_eq!(game.run.gold, 0);
    assert_eq!(game.meta.gold, 0);
    assert_eq!(game.meta.stats.total_runs, 0);
}

#[test]
fn potions_full_heal_then_run_dry() {
    let mut game = fresh_game(2);
    let player = game.player_id();
    game.world.stats.get_mut(player).unwrap().hp = 20;

    let events = game.handle(Command::UsePotion).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::PotionUsed {
            healed: 90,
            remaining: 0
        }]
    );
    assert_eq!(game.world.stats.get(player).unwrap().hp, 110);

    let err = game.handle(Command::UsePotion).unwrap_err();
    assert!(matches!(
        err,
        GameError::PreconditionNotMet(Precondition::NoPotionsLeft)
    ));
}

fn held_item(game: &mut Game, name: &str, deltas: StatDeltas) -> EntityId {
    let id = game.world.spawn();
    game.world.items.insert(
        id,
        Item {
            name: name.to_string(),
            rarity: Rarity::Rare,
            level: 3,
            deltas,
        },
    );
    id
}

#[test]
fn equipping_and_selling_jewelry_moves_stats_and_gold() {
    let mut game = fresh_game(4);
    let player = game.player_id();
    let band = held_item(
        &mut game,
        "Band of Force",
        StatDeltas {
            damage: 4,
            ..StatDeltas::default()
        },
    );

    let events = game.handle(Command::EquipItem { slot: 1, item: band }).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::ItemEquipped {
            item: band,
            slot: 1,
            replaced: None
        }]
    );
    assert_eq!(game.world.stats.get(player).unwrap().damage, 14);

    // Selling a worn item takes it off first; a level-3 rare fetches 24.
    let events = game.handle(Command::SellItem { item: band }).unwrap();
    assert_eq!(events, vec![GameEvent::ItemSold { item: band, gold: 24 }]);
    assert_eq!(game.world.stats.get(player).unwrap().damage, 10);
    assert_eq!(game.run.gold, 24);
    assert!(!game.world.is_alive(band));
}

#[test]
fn swapping_a_slot_reverts_the_old_item() {
    let mut game = fresh_game(6);
    let player = game.player_id();
    let band = held_item(
        &mut game,
        "Band of Force",
        StatDeltas {
            damage: 4,
            ..StatDeltas::default()
        },
    );
    let ring = held_item(
        &mut game,
        "Ring of Warding",
        StatDeltas {
            defense: 2,
            ..StatDeltas::default()
        },
    );

    game.handle(Command::EquipItem { slot: 0, item: band }).unwrap();
    let events = game.handle(Command::EquipItem { slot: 0, item: ring }).unwrap();
    assert_eq!(
        events,
        vec![GameEvent::ItemEquipped {
            item: ring,
            slot: 0,
            replaced: Some(band)
        }]
    );
    let stats = game.world.stats.get(player).unwrap();
    assert_eq!(stats.damage, 10);
    assert_eq!(stats.defense, 7);
    // The displaced band is back in the held pool, not destroyed.
    assert!(game.world.is_alive(band));
    let equipment = game.world.equipment.get(player).unwrap();
    assert!(!equipment.is_equipped(band));
    assert!(equipment.is_equipped(ring));
}

#[test]
fn bogus_item_references_are_invalid_commands() {
    let mut game = fresh_game(7);
    let missing = EntityId(9999);

    let err = game
        .handle(Command::EquipItem {
            slot: 3,
            item: missing,
        })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidCommand(_)));

    let err = game
        .handle(Command::EquipItem {
            slot: 0,
            item: missing,
        })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidCommand(_)));

    let err = game.handle(Command::SellItem { item: missing }).unwrap_err();
    assert!(matches!(err, GameError::InvalidCommand(_)));
}

#[test]
fn equipping_the_same_item_twice_is_refused() {
    let mut game = fresh_game(9);
    let band = held_item(&mut game, "Band of Force", StatDeltas::default());
    game.handle(Command::EquipItem { slot: 0, item: band }).unwrap();
    let err = game
        .handle(Command::EquipItem { slot: 1, item: band })
        .unwrap_err();
    assert!(matches!(err, GameError::InvalidCommand(_)));
}

/// One seed, one command script, one story: the whole event stream must
/// replay identically.
#[test]
fn same_seed_same_story() {
    let mut first = fresh_game(99);
    let mut second = fresh_game(99);
    overbuff(&mut first);
    overbuff(&mut second);

    for _ in 0..8 {
        let a = first.handle(Command::RequestRoll).unwrap();
        let b = second.handle(Command::RequestRoll).unwrap();
        assert_eq!(a, b);
    }
    assert_eq!(
        first.world.positions.get(first.player_id()),
        second.world.positions.get(second.player_id())
    );
    assert_eq!(first.run.gold, second.run.gold);
}

#[test]
fn timed_blessings_expire_on_schedule() {
    let mut game = fresh_game(21);
    overbuff(&mut game);
    let player = game.player_id();
    game.world.statuses.get_mut(player).unwrap().add(StatusEffect {
        kind: BonusKind::GoldFind,
        magnitude: 0.5,
        remaining: 2,
    });

    let first = game.handle(Command::RequestRoll).unwrap();
    assert!(!first.iter().any(|e| matches!(
        e,
        GameEvent::BlessingExpired {
            kind: BonusKind::GoldFind
        }
    )));
    let second = game.handle(Command::RequestRoll).unwrap();
    assert!(second.iter().any(|e| matches!(
        e,
        GameEvent::BlessingExpired {
            kind: BonusKind::GoldFind
        }
    )));
}

/// A dead run refuses turn commands but the profile shop stays open.
#[test]
fn profile_commands_survive_the_run_ending() {
    let mut game = fresh_game(31);
    game.run.round = 21;
    game.run.gold = 50;
    let player = game.player_id();
    game.world.stats.get_mut(player).unwrap().hp = 1;
    game.dispatch_boss().unwrap();
    assert!(game.is_run_over());

    let err = game.handle(Command::UsePotion).unwrap_err();
    assert!(matches!(
        err,
        GameError::PreconditionNotMet(Precondition::RunOver)
    ));

    let events = game
        .handle(Command::PurchaseUpgrade {
            upgrade: UpgradeId::Vitality,
        })
        .unwrap();
    assert_eq!(
        events,
        vec![GameEvent::UpgradePurchased {
            upgrade: UpgradeId::Vitality,
            level: 1,
            cost: 50
        }]
    );
    assert_eq!(game.meta.gold, 0);
}
