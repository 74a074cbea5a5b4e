//! Game orchestrator: commands in, ordered events out
//!
//! `Game` owns the whole simulation: the ECS world for the current run, the
//! board, the run ledger, the persistent profile, and the single RNG stream
//! every random draw comes from. Callers submit [`Command`]s and render the
//! [`GameEvent`]s that come back; a full turn resolves synchronously inside
//! one `handle` call.

pub mod commands;
pub mod events;

pub use commands::Command;
pub use events::GameEvent;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::{advance, Board, SquareKind};
use crate::combat::{resolve_encounter, Winner};
use crate::components::{BonusKind, Equipment, Player, Position, StatusEffects, JEWELRY_SLOTS};
use crate::core::config::GameConfig;
use crate::core::error::{GameError, Precondition, Result};
use crate::core::types::{EntityId, SquareIndex};
use crate::ecs::world::World;
use crate::loot::{apply_blessing, draw_blessing, generate_item, spawn_boss, spawn_monster};
use crate::progression::{MetaState, RunLedger, UpgradeId};
use crate::roster::{character_template, starting_loadout, ArchetypeId};

/// The complete game state and its command interface
pub struct Game {
    pub world: World,
    pub board: Board,
    pub run: RunLedger,
    pub meta: MetaState,
    config: GameConfig,
    rng: ChaCha8Rng,
    player: EntityId,
    run_over: bool,
}

impl Game {
    /// Builds a game and starts the first run
    ///
    /// The seed fixes the entire RNG stream: the same seed and command
    /// sequence always produce the same events.
    pub fn new(config: GameConfig, meta: MetaState, seed: u64) -> Result<Self> {
        config.validate().map_err(GameError::ConfigError)?;
        let board = Board::standard(config.board_size);
        let mut game = Self {
            world: World::new(),
            board,
            run: RunLedger::new(0),
            meta,
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            player: EntityId(0),
            run_over: true,
        };
        game.begin_run();
        Ok(game)
    }

    /// Rebuilds the ephemeral half of the state for a fresh run
    ///
    /// The old world is discarded wholesale, without banking; banking only
    /// happens when a run ends through death or boss victory. The RNG
    /// stream continues uninterrupted.
    pub fn begin_run(&mut self) -> Vec<GameEvent> {
        let archetype = self.meta.selected;
        let loadout = starting_loadout(archetype, &self.meta);
        self.world = World::new();
        let player = self.world.spawn();
        self.world.stats.insert(player, loadout.stats);
        self.world.modifiers.insert(player, loadout.modifiers);
        self.world.dice.insert(player, loadout.dice);
        self.world.positions.insert(player, Position { square: 0 });
        self.world.equipment.insert(player, Equipment::new());
        self.world.statuses.insert(player, StatusEffects::new());
        self.world.players.insert(
            player,
            Player {
                name: character_template(archetype).name.to_string(),
                archetype,
                potions: self.config.starting_potions,
            },
        );
        self.player = player;
        self.run = RunLedger::new(loadout.starting_gold);
        self.run_over = false;
        tracing::info!("Run started as {} with {} gold", archetype, self.run.gold);
        vec![GameEvent::RunStarted {
            archetype,
            round: self.run.round,
        }]
    }

    /// Resolves one command into its ordered events
    pub fn handle(&mut self, command: Command) -> Result<Vec<GameEvent>> {
        tracing::debug!("Handling {:?}", command);
        match command {
            Command::RequestRoll => self.request_roll(),
            Command::UsePotion => self.use_potion(),
            Command::EquipItem { slot, item } => self.equip_item(slot, item),
            Command::SellItem { item } => self.sell_item(item),
            Command::PurchaseUpgrade { upgrade } => self.purchase_upgrade(upgrade),
            Command::UnlockCharacter { archetype } => self.unlock_character(archetype),
            Command::ChooseCharacter { archetype } => self.choose_character(archetype),
            Command::RestartRun => Ok(self.begin_run()),
        }
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub fn is_run_over(&self) -> bool {
        self.run_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Challenges the boss directly, subject to the round gate
    pub fn dispatch_boss(&mut self) -> Result<Vec<GameEvent>> {
        self.ensure_run_active()?;
        if !self.boss_available() {
            return Err(GameError::PreconditionNotMet(
                Precondition::BossNotYetAvailable {
                    current: self.run.round,
                    required: self.config.boss_unlock_round + 1,
                },
            ));
        }
        let mut events = Vec::new();
        self.spawn_and_fight_boss(&mut events)?;
        Ok(events)
    }

    fn ensure_run_active(&self) -> Result<()> {
        if self.run_over {
            return Err(GameError::PreconditionNotMet(Precondition::RunOver));
        }
        Ok(())
    }

    fn boss_available(&self) -> bool {
        self.run.round > self.config.boss_unlock_round
    }

    /// One full player turn: roll, move, land, tick, advance the round
    fn request_roll(&mut self) -> Result<Vec<GameEvent>> {
        self.ensure_run_active()?;
        let mut events = Vec::new();

        let spec = self
            .world
            .dice
            .get(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?
            .clone();
        let outcome = spec.roll(&mut self.rng);
        tracing::debug!("Rolled {} on {}", outcome.total, spec);
        events.push(GameEvent::RollResult {
            breakdown: outcome.breakdown,
            modifier: spec.modifier,
            total: outcome.total,
        });

        let from = self
            .world
            .positions
            .get(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?
            .square;
        let movement = advance(from, outcome.total.max(0) as u32, self.board.size());
        let landed = movement.to;
        let laps = movement.laps;
        if let Some(position) = self.world.positions.get_mut(self.player) {
            position.square = landed;
        }
        events.push(GameEvent::MovementResult {
            from: movement.from,
            to: landed,
            passed: movement.passed,
        });
        for _ in 0..laps {
            self.run.gold += self.config.pass_start_gold;
            events.push(GameEvent::PassedStart {
                gold: self.config.pass_start_gold,
            });
        }

        self.resolve_landing(landed, &mut events)?;

        // The turn only completes if the landing left the run alive.
        if !self.run_over {
            self.tick_statuses(&mut events);
            self.run.round += 1;
        }
        Ok(events)
    }

    fn resolve_landing(&mut self, square: SquareIndex, events: &mut Vec<GameEvent>) -> Result<()> {
        let kind = self.board.kind_at(square).ok_or_else(|| {
            GameError::InvariantViolation(format!("landed on square {square} outside the board"))
        })?;
        match kind {
            SquareKind::Empty => {}
            SquareKind::Monster { tier } => {
                let monster = spawn_monster(
                    &mut self.world,
                    self.run.round,
                    tier,
                    &self.config,
                    &mut self.rng,
                );
                if let Some(info) = self.world.monsters.get(monster) {
                    events.push(GameEvent::MonsterAppeared {
                        monster,
                        name: info.name.clone(),
                        tier: info.tier,
                    });
                }
                self.fight(monster, events)?;
            }
            SquareKind::Item => {
                self.drop_item(events);
            }
            SquareKind::Shrine => {
                let blessing = draw_blessing(&mut self.rng);
                apply_blessing(&mut self.world, self.player, &blessing)?;
                tracing::debug!("Blessing received: {}", blessing.name);
                events.push(GameEvent::BlessingApplied {
                    name: blessing.name.to_string(),
                    permanent: blessing.is_permanent(),
                });
            }
            SquareKind::Inn => {
                let healed = self
                    .world
                    .stats
                    .get_mut(self.player)
                    .ok_or(GameError::EntityNotFound(self.player))?
                    .full_heal();
                events.push(GameEvent::InnRested { healed });
            }
            SquareKind::Shop => {
                events.push(GameEvent::ShopVisited);
            }
            SquareKind::Boss => {
                if self.boss_available() {
                    self.spawn_and_fight_boss(events)?;
                } else {
                    events.push(GameEvent::BossUnavailable {
                        round: self.run.round,
                        required: self.config.boss_unlock_round + 1,
                    });
                }
            }
        }
        Ok(())
    }

    fn spawn_and_fight_boss(&mut self, events: &mut Vec<GameEvent>) -> Result<()> {
        let boss = spawn_boss(&mut self.world);
        if let Some(info) = self.world.monsters.get(boss) {
            events.push(GameEvent::MonsterAppeared {
                monster: boss,
                name: info.name.clone(),
                tier: info.tier,
            });
        }
        self.fight(boss, events)
    }

    /// Runs an encounter to completion and settles its consequences
    fn fight(&mut self, monster: EntityId, events: &mut Vec<GameEvent>) -> Result<()> {
        let result = resolve_encounter(
            &mut self.world,
            self.player,
            monster,
            &self.config,
            &mut self.rng,
        )?;
        for record in result.rounds_log {
            events.push(GameEvent::CombatRoundResult {
                round: record.round,
                actions: record.actions,
            });
        }
        let info = self
            .world
            .monsters
            .get(monster)
            .cloned()
            .ok_or(GameError::EntityNotFound(monster))?;
        match result.winner {
            Winner::Player => {
                self.run.kills += 1;
                let earned = (info.gold_reward as f32 * (1.0 + self.gold_find_fraction())).round()
                    as u32;
                self.run.gold += earned;
                tracing::info!("Defeated {} for {} gold", info.name, earned);
                events.push(GameEvent::CombatResolved {
                    winner: result.winner,
                    rounds: result.rounds,
                    damage_dealt: result.damage_dealt,
                    damage_taken: result.damage_taken,
                    lifesteal_occurred: result.lifesteal_occurred,
                    gold_earned: earned,
                });
                if self.rng.gen::<f32>() < info.drop_chance {
                    self.drop_item(events);
                }
                self.world.despawn(monster);
                if info.boss {
                    self.finish_run(true, events);
                }
            }
            Winner::Monster => {
                events.push(GameEvent::CombatResolved {
                    winner: result.winner,
                    rounds: result.rounds,
                    damage_dealt: result.damage_dealt,
                    damage_taken: result.damage_taken,
                    lifesteal_occurred: result.lifesteal_occurred,
                    gold_earned: 0,
                });
                self.world.despawn(monster);
                self.finish_run(false, events);
            }
        }
        Ok(())
    }

    /// Fraction added to monster gold, from character quirks and blessings
    fn gold_find_fraction(&self) -> f32 {
        let from_modifiers = self
            .world
            .modifiers
            .get(self.player)
            .map_or(0.0, |m| m.gold_find);
        let from_statuses = self
            .world
            .statuses
            .get(self.player)
            .map_or(0.0, |s| s.bonus(BonusKind::GoldFind));
        from_modifiers + from_statuses
    }

    /// Rolls a fresh item into the unequipped pool
    fn drop_item(&mut self, events: &mut Vec<GameEvent>) {
        let item = generate_item(self.run.round, &self.config, &mut self.rng);
        let id = self.world.spawn();
        tracing::debug!("Item dropped: {} (level {})", item.name, item.level);
        events.push(GameEvent::ItemDropped {
            item: id,
            name: item.name.clone(),
            rarity: item.rarity,
            level: item.level,
        });
        self.world.items.insert(id, item);
        self.run.items_collected += 1;
    }

    /// Banks the run into the profile exactly once and marks it over
    fn finish_run(&mut self, victory: bool, events: &mut Vec<GameEvent>) {
        let summary = self.meta.bank_run(&self.run, victory);
        self.run_over = true;
        tracing::info!(
            "Run ended: victory={}, banked {} gold over {} rounds",
            summary.victory,
            summary.gold_banked,
            summary.rounds_survived
        );
        events.push(GameEvent::RunEnded {
            victory: summary.victory,
            gold_banked: summary.gold_banked,
            rounds_survived: summary.rounds_survived,
        });
    }

    fn tick_statuses(&mut self, events: &mut Vec<GameEvent>) {
        if let Some(statuses) = self.world.statuses.get_mut(self.player) {
            for expired in statuses.tick_round() {
                events.push(GameEvent::BlessingExpired { kind: expired.kind });
            }
        }
    }

    fn use_potion(&mut self) -> Result<Vec<GameEvent>> {
        self.ensure_run_active()?;
        let player = self
            .world
            .players
            .get_mut(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?;
        if player.potions == 0 {
            return Err(GameError::PreconditionNotMet(Precondition::NoPotionsLeft));
        }
        player.potions -= 1;
        let remaining = player.potions;
        let healed = self
            .world
            .stats
            .get_mut(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?
            .full_heal();
        Ok(vec![GameEvent::PotionUsed { healed, remaining }])
    }

    fn equip_item(&mut self, slot: usize, item: EntityId) -> Result<Vec<GameEvent>> {
        self.ensure_run_active()?;
        if slot >= JEWELRY_SLOTS {
            return Err(GameError::InvalidCommand(format!(
                "jewelry slot {slot} does not exist (0..{JEWELRY_SLOTS})"
            )));
        }
        let new_deltas = self
            .world
            .items
            .get(item)
            .ok_or_else(|| GameError::InvalidCommand(format!("{item} is not a held item")))?
            .deltas;
        let equipment = self
            .world
            .equipment
            .get_mut(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?;
        if equipment.is_equipped(item) {
            return Err(GameError::InvalidCommand(format!(
                "{item} is already equipped"
            )));
        }
        let replaced = equipment.equip(slot, item);
        let old_deltas = replaced.and_then(|old| self.world.items.get(old).map(|i| i.deltas));
        let stats = self
            .world
            .stats
            .get_mut(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?;
        if let Some(deltas) = old_deltas {
            deltas.unapply(stats);
        }
        new_deltas.apply(stats);
        tracing::debug!("Equipped {item} in slot {slot}");
        Ok(vec![GameEvent::ItemEquipped {
            item,
            slot,
            replaced,
        }])
    }

    fn sell_item(&mut self, item: EntityId) -> Result<Vec<GameEvent>> {
        self.ensure_run_active()?;
        let item_data = self
            .world
            .items
            .get(item)
            .ok_or_else(|| GameError::InvalidCommand(format!("{item} is not a held item")))?;
        let value = item_data.sell_value();
        let deltas = item_data.deltas;
        let equipment = self
            .world
            .equipment
            .get_mut(self.player)
            .ok_or(GameError::EntityNotFound(self.player))?;
        if equipment.unequip_item(item) {
            let stats = self
                .world
                .stats
                .get_mut(self.player)
                .ok_or(GameError::EntityNotFound(self.player))?;
            deltas.unapply(stats);
        }
        self.world.despawn(item);
        self.run.gold += value;
        tracing::debug!("Sold {item} for {value} gold");
        Ok(vec![GameEvent::ItemSold { item, gold: value }])
    }

    fn purchase_upgrade(&mut self, upgrade: UpgradeId) -> Result<Vec<GameEvent>> {
        let (level, cost) = self.meta.purchase_upgrade(upgrade)?;
        Ok(vec![GameEvent::UpgradePurchased {
            upgrade,
            level,
            cost,
        }])
    }

    fn unlock_character(&mut self, archetype: ArchetypeId) -> Result<Vec<GameEvent>> {
        let cost = self.meta.unlock_character(archetype)?;
        Ok(vec![GameEvent::CharacterUnlocked { archetype, cost }])
    }

    fn choose_character(&mut self, archetype: ArchetypeId) -> Result<Vec<GameEvent>> {
        self.meta.choose_character(archetype)?;
        Ok(vec![GameEvent::CharacterChosen { archetype }])
    }
}
