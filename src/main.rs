//! Dicebound - interactive entry point
//!
//! A line-based table for the simulation core: each input becomes a typed
//! command, and the events that come back are narrated to the terminal.
//! The persistent profile loads from and saves to a JSON file.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use dicebound::board::SquareKind;
use dicebound::combat::Winner;
use dicebound::components::StatDeltas;
use dicebound::core::config::GameConfig;
use dicebound::core::types::EntityId;
use dicebound::game::{Command, Game, GameEvent};
use dicebound::progression::{upgrade_catalog, upgrade_cost, MetaState, UpgradeEffect, UpgradeId};
use dicebound::roster::{roster, ArchetypeId};
use dicebound::{GameError, Result};

/// Dicebound - a dice-driven roguelike board game
#[derive(Parser, Debug)]
#[command(name = "dicebound")]
#[command(about = "Roll dice around the loop, fight what you land on, bank gold")]
struct Args {
    /// Random seed for a deterministic session
    #[arg(long)]
    seed: Option<u64>,

    /// Profile save file (JSON)
    #[arg(long, default_value = "dicebound_save.json")]
    save: PathBuf,

    /// TOML file overriding the default tuning
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dicebound=info")
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!("Session seed: {seed}");

    let config = match &args.config {
        Some(path) => GameConfig::from_toml_file(path)?,
        None => GameConfig::default(),
    };
    let meta = if args.save.exists() {
        MetaState::load_from_file(&args.save)?
    } else {
        MetaState::new()
    };

    let mut game = Game::new(config, meta, seed)?;

    println!("\n=== DICEBOUND ===");
    println!(
        "Roll your dice around the loop. Gold banks when the run ends; the\n\
         warden opens his door after round {}.",
        game.config().boss_unlock_round
    );
    println!();
    print_help();

    loop {
        print_status(&game);
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        if input == "help" || input == "h" {
            print_help();
            continue;
        }
        if input == "status" || input == "s" {
            print_profile(&game);
            continue;
        }
        if input == "items" || input == "i" {
            print_items(&game);
            continue;
        }
        if input == "upgrades" || input == "u" {
            print_upgrades(&game);
            continue;
        }
        if input == "roster" {
            print_roster(&game);
            continue;
        }
        if input == "board" {
            print_board(&game);
            continue;
        }

        let outcome = match parse_input(input) {
            Some(ParsedInput::Command(command)) => game.handle(command),
            Some(ParsedInput::Boss) => game.dispatch_boss(),
            None => {
                println!("Unknown command; try 'help'.");
                continue;
            }
        };
        match outcome {
            Ok(events) => print_events(&game, &events),
            Err(GameError::PreconditionNotMet(reason)) => println!("Can't do that: {reason}"),
            Err(GameError::InvalidCommand(reason)) => println!("Invalid: {reason}"),
            Err(other) => return Err(other),
        }
    }

    game.meta.save_to_file(&args.save)?;
    println!("Profile saved to {}.", args.save.display());
    Ok(())
}

enum ParsedInput {
    Command(Command),
    Boss,
}

fn parse_input(input: &str) -> Option<ParsedInput> {
    let mut parts = input.split_whitespace();
    let command = match parts.next()? {
        "roll" | "r" => Command::RequestRoll,
        "potion" | "p" => Command::UsePotion,
        "boss" | "b" => return Some(ParsedInput::Boss),
        "restart" => Command::RestartRun,
        "equip" | "e" => {
            let slot = parts.next()?.parse().ok()?;
            let item = EntityId(parts.next()?.parse().ok()?);
            Command::EquipItem { slot, item }
        }
        "sell" => {
            let item = EntityId(parts.next()?.parse().ok()?);
            Command::SellItem { item }
        }
        "buy" => Command::PurchaseUpgrade {
            upgrade: parse_upgrade(parts.next()?)?,
        },
        "unlock" => Command::UnlockCharacter {
            archetype: parse_archetype(parts.next()?)?,
        },
        "choose" => Command::ChooseCharacter {
            archetype: parse_archetype(parts.next()?)?,
        },
        _ => return None,
    };
    Some(ParsedInput::Command(command))
}

fn parse_upgrade(name: &str) -> Option<UpgradeId> {
    UpgradeId::ALL
        .iter()
        .copied()
        .find(|id| id.to_string().eq_ignore_ascii_case(name))
}

fn parse_archetype(name: &str) -> Option<ArchetypeId> {
    ArchetypeId::ALL
        .iter()
        .copied()
        .find(|id| id.to_string().eq_ignore_ascii_case(name))
}

fn print_help() {
    println!("Commands:");
    println!("  roll / r            - Roll your dice and take a turn");
    println!("  potion / p          - Drink a potion (full heal)");
    println!("  equip <slot> <id>   - Wear a held item (slots 0-2)");
    println!("  sell <id>           - Sell a held or worn item");
    println!("  boss / b            - Challenge the warden directly");
    println!("  buy <upgrade>       - Spend banked gold on an upgrade");
    println!("  unlock <character>  - Unlock a character with banked gold");
    println!("  choose <character>  - Pick who leads the next run");
    println!("  restart             - Abandon or replace the current run");
    println!("  items / i           - List worn and held items");
    println!("  upgrades / u        - List upgrade tracks and costs");
    println!("  roster              - List characters");
    println!("  board               - Draw the loop");
    println!("  status / s          - Show the full profile");
    println!("  quit / q            - Save and exit");
    println!();
}

fn print_status(game: &Game) {
    if game.is_run_over() {
        println!(
            "[run over | {} gold banked | 'restart' to go again]",
            game.meta.gold
        );
        return;
    }
    let player = game.player_id();
    let (hp, max_hp) = game
        .world
        .stats
        .get(player)
        .map_or((0, 0), |s| (s.hp, s.max_hp));
    let square = game.world.positions.get(player).map_or(0, |p| p.square);
    let kind = game
        .board
        .kind_at(square)
        .map(|k| k.to_string())
        .unwrap_or_default();
    let potions = game.world.players.get(player).map_or(0, |p| p.potions);
    println!(
        "[round {} | {}/{} hp | {} gold | square {} ({kind}) | {} potion(s)]",
        game.run.round, hp, max_hp, game.run.gold, square, potions
    );
}

fn print_events(game: &Game, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::RunStarted { archetype, .. } => {
                println!("A new run begins as the {archetype}.");
            }
            GameEvent::RollResult {
                breakdown,
                modifier,
                total,
            } => {
                if *modifier != 0 {
                    println!("You roll {breakdown:?} {modifier:+} = {total}.");
                } else {
                    println!("You roll {breakdown:?} = {total}.");
                }
            }
            GameEvent::MovementResult { to, .. } => {
                let kind = game
                    .board
                    .kind_at(*to)
                    .map(|k| k.to_string())
                    .unwrap_or_default();
                println!("You stop on square {to} ({kind}).");
            }
            GameEvent::PassedStart { gold } => {
                println!("Passing the start square pays {gold} gold.");
            }
            GameEvent::MonsterAppeared { name, tier, .. } => {
                println!("A {name} (tier {tier}) blocks the way!");
            }
            GameEvent::CombatRoundResult { round, actions } => {
                for action in actions {
                    let crit = if action.crit { ", crit!" } else { "" };
                    let drain = if action.lifesteal_heal > 0 {
                        format!(" (drains {})", action.lifesteal_heal)
                    } else {
                        String::new()
                    };
                    if action.attacker == game.player_id() {
                        println!("  R{round}: you hit for {}{crit}{drain}", action.damage);
                    } else {
                        println!("  R{round}: it hits you for {}{crit}{drain}", action.damage);
                    }
                }
            }
            GameEvent::CombatResolved {
                winner,
                rounds,
                gold_earned,
                ..
            } => match winner {
                Winner::Player => {
                    println!("Victory after {rounds} round(s); {gold_earned} gold looted.");
                }
                Winner::Monster => println!("You fall after {rounds} round(s)."),
            },
            GameEvent::ItemDropped {
                item, name, level, ..
            } => {
                println!(
                    "Loot: {name} (level {level}) - 'equip <slot> {}' to wear it.",
                    item.0
                );
            }
            GameEvent::BlessingApplied { name, permanent } => {
                let note = if *permanent { " (permanent)" } else { "" };
                println!("The shrine grants {name}{note}.");
            }
            GameEvent::BlessingExpired { kind } => println!("A blessing fades ({kind:?})."),
            GameEvent::InnRested { healed } => println!("The inn restores {healed} hp."),
            GameEvent::ShopVisited => {
                println!("The shopkeeper has nothing you need today.");
            }
            GameEvent::BossUnavailable { round, required } => {
                println!("The warden's door stays sealed until round {required} (now {round}).");
            }
            GameEvent::PotionUsed { healed, remaining } => {
                println!("You drink a potion (+{healed} hp, {remaining} left).");
            }
            GameEvent::ItemEquipped { slot, replaced, .. } => match replaced {
                Some(old) => println!("Equipped into slot {slot}, swapping out item {}.", old.0),
                None => println!("Equipped into slot {slot}."),
            },
            GameEvent::ItemSold { gold, .. } => println!("Sold for {gold} gold."),
            GameEvent::UpgradePurchased {
                upgrade,
                level,
                cost,
            } => {
                println!("{upgrade} is now level {level} (-{cost} gold).");
            }
            GameEvent::CharacterUnlocked { archetype, cost } => {
                println!("{archetype} unlocked (-{cost} gold).");
            }
            GameEvent::CharacterChosen { archetype } => {
                println!("{archetype} will lead the next run.");
            }
            GameEvent::RunEnded {
                victory,
                gold_banked,
                rounds_survived,
            } => {
                if *victory {
                    println!(
                        "THE DICE WARDEN FALLS. {gold_banked} gold banked over {rounds_survived} rounds."
                    );
                } else {
                    println!("The run ends on round {rounds_survived}; {gold_banked} gold banked.");
                }
            }
        }
    }
}

fn print_profile(game: &Game) {
    let stats = &game.meta.stats;
    println!("Bank: {} gold ({} lifetime)", game.meta.gold, game.meta.lifetime_gold);
    println!(
        "Runs: {} | best round {} | {} kills | {} warden kills",
        stats.total_runs, stats.best_round, stats.total_kills, stats.boss_victories
    );
    if !game.is_run_over() {
        let player = game.player_id();
        if let Some(s) = game.world.stats.get(player) {
            println!(
                "Now: {} damage, {} defense, {:.0}% crit, {:.2} speed, {:.0}% life-steal",
                s.damage,
                s.defense,
                s.crit_chance * 100.0,
                s.speed,
                s.life_steal * 100.0
            );
        }
        if let Some(statuses) = game.world.statuses.get(player) {
            for effect in &statuses.active {
                println!(
                    "  blessing: {:?} {:+} for {} more round(s)",
                    effect.kind, effect.magnitude, effect.remaining
                );
            }
        }
    }
}

fn print_items(game: &Game) {
    let player = game.player_id();
    if let Some(equipment) = game.world.equipment.get(player) {
        for (slot, occupant) in equipment.slots.iter().enumerate() {
            match occupant.and_then(|id| game.world.items.get(id).map(|item| (id, item))) {
                Some((id, item)) => println!(
                    "  slot {slot}: {} [{}] ({})",
                    item.name,
                    describe_deltas(&item.deltas),
                    id.0
                ),
                None => println!("  slot {slot}: empty"),
            }
        }
        let mut held: Vec<_> = game
            .world
            .items
            .iter()
            .filter(|(id, _)| !equipment.is_equipped(*id))
            .collect();
        held.sort_by_key(|(id, _)| *id);
        if held.is_empty() {
            println!("  (nothing in the satchel)");
        }
        for (id, item) in held {
            println!(
                "  held {}: {} [{}] sells for {}",
                id.0,
                item.name,
                describe_deltas(&item.deltas),
                item.sell_value()
            );
        }
    }
}

fn describe_deltas(deltas: &StatDeltas) -> String {
    let mut parts = Vec::new();
    if deltas.max_hp != 0 {
        parts.push(format!("{:+} hp", deltas.max_hp));
    }
    if deltas.damage != 0 {
        parts.push(format!("{:+} dmg", deltas.damage));
    }
    if deltas.defense != 0 {
        parts.push(format!("{:+} def", deltas.defense));
    }
    if deltas.crit_chance != 0.0 {
        parts.push(format!("{:+.0}% crit", deltas.crit_chance * 100.0));
    }
    if deltas.life_steal != 0.0 {
        parts.push(format!("{:+.0}% steal", deltas.life_steal * 100.0));
    }
    if deltas.speed != 0.0 {
        parts.push(format!("{:+.2} spd", deltas.speed));
    }
    parts.join(", ")
}

fn print_upgrades(game: &Game) {
    for def in upgrade_catalog() {
        let level = game.meta.upgrade_level(def.id);
        let price = if level >= def.max_level {
            "MAX".to_string()
        } else {
            format!("{} gold", upgrade_cost(&def, level))
        };
        println!(
            "  {:<11} Lv {}/{}  next: {:<9} {}",
            def.name,
            level,
            def.max_level,
            price,
            describe_effect(&def.effect)
        );
    }
    println!("Bank: {} gold", game.meta.gold);
}

fn describe_effect(effect: &UpgradeEffect) -> String {
    match effect {
        UpgradeEffect::MaxHp(n) => format!("+{n} max hp per level"),
        UpgradeEffect::Damage(n) => format!("+{n} damage per level"),
        UpgradeEffect::CritChance(f) => format!("+{:.0}% crit per level", f * 100.0),
        UpgradeEffect::Defense(n) => format!("+{n} defense per level"),
        UpgradeEffect::Speed(f) => format!("+{:.0}% speed per level", f * 100.0),
        UpgradeEffect::LifeSteal(f) => format!("+{:.0}% life-steal per level", f * 100.0),
        UpgradeEffect::StartingGold(n) => format!("+{n} starting gold per level"),
    }
}

fn print_roster(game: &Game) {
    for template in roster() {
        let marker = if template.id == game.meta.selected {
            ">"
        } else {
            " "
        };
        let status = if game.meta.unlocked.contains(&template.id) {
            "unlocked".to_string()
        } else {
            format!("{} gold", template.unlock_cost)
        };
        println!(
            "{marker} {:<10} {:<18} {:<9} {}",
            template.name,
            template.dice.to_string(),
            status,
            template.blurb
        );
    }
}

fn print_board(game: &Game) {
    let player_square = game
        .world
        .positions
        .get(game.player_id())
        .map_or(usize::MAX, |p| p.square);
    let mut line = String::new();
    for square in game.board.squares() {
        let symbol = match square.kind {
            SquareKind::Empty => '.',
            SquareKind::Monster { .. } => 'M',
            SquareKind::Item => 'I',
            SquareKind::Shrine => '^',
            SquareKind::Shop => '$',
            SquareKind::Inn => '+',
            SquareKind::Boss => 'B',
        };
        if square.index == player_square {
            line.push('[');
            line.push(symbol);
            line.push(']');
        } else {
            line.push(symbol);
        }
    }
    println!("{line}");
    println!("[you] | M monster, I item, ^ shrine, $ shop, + inn, B boss, . empty");
}
