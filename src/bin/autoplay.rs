//! Headless autoplayer
//!
//! Drives whole runs with a simple policy: roll every turn, drink when low,
//! wear what drops, sell the overflow, buy the cheapest upgrade between
//! runs, and challenge the warden once the gate opens. Reports one line per
//! run plus a batch summary, which makes balance changes easy to eyeball.

use clap::Parser;

use dicebound::core::config::GameConfig;
use dicebound::core::types::EntityId;
use dicebound::game::{Command, Game, GameEvent};
use dicebound::progression::{upgrade_catalog, upgrade_cost, MetaState};
use dicebound::Result;

/// Headless batch runner for balance checks
#[derive(Parser, Debug)]
#[command(name = "autoplay")]
#[command(about = "Drive full runs headlessly and report the outcomes")]
struct Args {
    /// Random seed for a deterministic batch
    #[arg(long)]
    seed: Option<u64>,

    /// Number of runs to play
    #[arg(long, default_value_t = 10)]
    runs: u32,

    /// Safety cap on turns per run
    #[arg(long, default_value_t = 200)]
    max_turns: u32,
}

struct RunReport {
    victory: bool,
    gold_banked: u32,
    rounds: u32,
    kills: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("dicebound=warn")
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    println!("Autoplay: {} run(s), seed {}", args.runs, seed);

    let mut game = Game::new(GameConfig::default(), MetaState::new(), seed)?;
    let mut victories = 0u32;
    let mut best_round = 0u32;
    let mut total_banked = 0u32;

    for run in 1..=args.runs {
        match play_run(&mut game, args.max_turns)? {
            Some(report) => {
                if report.victory {
                    victories += 1;
                }
                best_round = best_round.max(report.rounds);
                total_banked += report.gold_banked;
                println!(
                    "run {:>3}: {} at round {} | {} kills | {} gold banked",
                    run,
                    if report.victory { "WARDEN SLAIN" } else { "died" },
                    report.rounds,
                    report.kills,
                    report.gold_banked
                );
            }
            None => println!("run {:>3}: stalled out after {} turns", run, args.max_turns),
        }
        let bought = spend_bank(&mut game)?;
        if bought > 0 {
            println!("         bought {bought} upgrade level(s)");
        }
        game.handle(Command::RestartRun)?;
    }

    println!();
    println!(
        "{victories} victories / {} runs | best round {best_round} | {total_banked} gold banked | bank now {}",
        args.runs, game.meta.gold
    );
    Ok(())
}

/// Plays one run to its end, or to the turn cap
fn play_run(game: &mut Game, max_turns: u32) -> Result<Option<RunReport>> {
    for _ in 0..max_turns {
        maybe_drink(game)?;

        let events = game.handle(Command::RequestRoll)?;
        let mut dropped = Vec::new();
        let mut ended = None;
        for event in &events {
            match event {
                GameEvent::ItemDropped { item, .. } => dropped.push(*item),
                GameEvent::RunEnded {
                    victory,
                    gold_banked,
                    rounds_survived,
                } => {
                    ended = Some(RunReport {
                        victory: *victory,
                        gold_banked: *gold_banked,
                        rounds: *rounds_survived,
                        kills: game.run.kills,
                    });
                }
                _ => {}
            }
        }
        if let Some(report) = ended {
            return Ok(Some(report));
        }
        for item in dropped {
            stow(game, item)?;
        }

        if boss_ready(game) {
            let events = game.dispatch_boss()?;
            for event in &events {
                if let GameEvent::RunEnded {
                    victory,
                    gold_banked,
                    rounds_survived,
                } = event
                {
                    return Ok(Some(RunReport {
                        victory: *victory,
                        gold_banked: *gold_banked,
                        rounds: *rounds_survived,
                        kills: game.run.kills,
                    }));
                }
            }
        }
    }
    Ok(None)
}

fn maybe_drink(game: &mut Game) -> Result<()> {
    let player = game.player_id();
    let low = game
        .world
        .stats
        .get(player)
        .map_or(false, |s| s.hp * 10 < s.max_hp * 3);
    let has_potion = game
        .world
        .players
        .get(player)
        .map_or(false, |p| p.potions > 0);
    if low && has_potion {
        game.handle(Command::UsePotion)?;
    }
    Ok(())
}

/// Equips a drop into the first free slot, or sells it when full
fn stow(game: &mut Game, item: EntityId) -> Result<()> {
    let free_slot = game
        .world
        .equipment
        .get(game.player_id())
        .and_then(|eq| eq.slots.iter().position(|slot| slot.is_none()));
    match free_slot {
        Some(slot) => game.handle(Command::EquipItem { slot, item })?,
        None => game.handle(Command::SellItem { item })?,
    };
    Ok(())
}

/// Challenge the warden once the gate is open and hp is near full
fn boss_ready(game: &Game) -> bool {
    if game.is_run_over() || game.run.round <= game.config().boss_unlock_round {
        return false;
    }
    game.world
        .stats
        .get(game.player_id())
        .map_or(false, |s| s.hp * 5 >= s.max_hp * 4)
}

/// Greedily buys the cheapest affordable upgrade level
fn spend_bank(game: &mut Game) -> Result<u32> {
    let mut bought = 0;
    loop {
        let cheapest = upgrade_catalog()
            .into_iter()
            .filter(|def| game.meta.upgrade_level(def.id) < def.max_level)
            .map(|def| (upgrade_cost(&def, game.meta.upgrade_level(def.id)), def.id))
            .min_by_key(|(cost, _)| *cost);
        match cheapest {
            Some((cost, id)) if cost <= game.meta.gold => {
                game.handle(Command::PurchaseUpgrade { upgrade: id })?;
                bought += 1;
            }
            _ => break,
        }
    }
    Ok(bought)
}
