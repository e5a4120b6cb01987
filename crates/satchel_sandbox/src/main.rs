//! Satchel Sandbox
//!
//! Runs a scripted session against a headless scene and logs every scene
//! call and inventory event along the way.
//!
//! Run with: cargo run -p satchel_sandbox -- [config.json]
//!
//! `SATCHEL_BASE_CAPACITY` and `SATCHEL_AUTO_SORT` override the file.

mod scene;

use satchel_inventory::error::Result;
use satchel_inventory::prelude::*;
use scene::LoggingScene;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args().nth(1).map(PathBuf::from);
    let config = match InventoryConfig::load(path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    log::info!(
        "Base capacity {}, auto sort {}",
        config.base_capacity,
        config
            .auto_sort
            .map(|m| m.to_string())
            .unwrap_or_else(|| "off".to_string())
    );

    match run_session(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Session aborted: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_session(config: &InventoryConfig) -> Result<()> {
    let mut scene = LoggingScene::new(&config.sockets);
    let mut inventory = Inventory::from_config(config);

    // Heavy ore only partially fits; the rest stays on the ground
    let mut ore = scene.place(
        ItemDescriptor::new("iron_ore", "Iron Ore")
            .with_pickup_amount(30)
            .with_max_amount(20)
            .with_weight(2),
    );
    report("pick up ore", inventory.add_item(&mut ore, &mut scene)?);

    let mut pack = scene.place(
        ItemDescriptor::new("leather_pack", "Leather Pack")
            .with_kind(ItemKind::Backpack)
            .with_capacity_bonus(20)
            .with_visual("meshes/leather_pack"),
    );
    report("equip pack", inventory.add_item(&mut pack, &mut scene)?);
    report("pick up rest of ore", inventory.add_item(&mut ore, &mut scene)?);

    let mut bigger = scene.place(
        ItemDescriptor::new("frame_pack", "Frame Pack")
            .with_kind(ItemKind::Backpack)
            .with_capacity_bonus(40)
            .with_visual("meshes/frame_pack"),
    );
    report("swap pack", inventory.add_item(&mut bigger, &mut scene)?);

    let mut potions = scene.place(
        ItemDescriptor::new("potion", "Healing Potion")
            .with_pickup_amount(4)
            .with_max_amount(5)
            .with_weight(1)
            .with_sort_priority(-1),
    );
    report("pick up potions", inventory.add_item(&mut potions, &mut scene)?);

    let ore_class = ItemClassId::new("iron_ore");
    if let Some((index, _)) = inventory.find_stack_by_class(&ore_class, true) {
        let created = inventory.split_stack(index, 5)?;
        log::info!("Split 5 ore onto {}", created);
    }

    if let Some((first, _)) = inventory.find_stack_by_class(&ore_class, false) {
        let last = inventory.len() - 1;
        if first != last {
            let outcome = inventory.combine_stack(first, last)?;
            log::info!("Combined ore stacks: {:?}", outcome);
        }
    }

    inventory.use_item(&ItemClassId::new("potion"), &mut scene)?;

    if let Some(stack) = inventory.find_stack_by_index(0) {
        let unique_id = stack.unique_id;
        inventory.drop_item(unique_id, &mut scene)?;
    }

    inventory.sort_inventory(SortMethod::Priority);

    for event in inventory.drain_events() {
        log::info!("event: {:?}", event);
    }
    print_summary(&inventory, &scene);
    Ok(())
}

fn report(step: &str, outcome: PickupOutcome) {
    match outcome {
        PickupOutcome::OutOfSpace { requested } => {
            log::warn!("{}: no room for {}", step, requested)
        }
        outcome if !outcome.is_complete() => {
            log::warn!("{}: took {} ({:?})", step, outcome.picked(), outcome)
        }
        outcome => log::info!("{}: {:?}", step, outcome),
    }
}

fn print_summary(inventory: &Inventory, scene: &LoggingScene) {
    println!();
    println!(
        "Load {}/{} ({} base)",
        inventory.calculate_inventory_weight(),
        inventory.total_capacity(),
        inventory.base_capacity()
    );
    for (index, stack) in inventory.stacks().iter().enumerate() {
        println!(
            "  [{}] {:<16} x{:<3} {} ({} wt)",
            index,
            stack.name,
            stack.amount,
            stack.unique_id,
            Inventory::calculate_stack_weight(stack)
        );
    }
    for (slot, entry) in inventory.equipment().iter() {
        println!("  {:<8} {}", slot, entry.name);
    }
    println!("{} item(s) left in the world", scene.world_len());
}
