//! Integration tests for satchel_inventory
//!
//! Drives the inventory through its public API against a headless scene.

use satchel_inventory::*;

fn stackable(class: &str, amount: u32, max: u32, weight: u32) -> ItemDescriptor {
    ItemDescriptor::new(class, class)
        .with_pickup_amount(amount)
        .with_max_amount(max)
        .with_weight(weight)
}

fn backpack(class: &str, bonus: u32) -> ItemDescriptor {
    ItemDescriptor::new(class, class)
        .with_kind(ItemKind::Backpack)
        .with_capacity_bonus(bonus)
        .with_visual(format!("meshes/{}", class))
}

fn amounts(inv: &Inventory) -> Vec<u32> {
    inv.stacks().iter().map(|s| s.amount).collect()
}

#[test]
fn test_partial_pickup_leaves_remainder_in_world() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(10);
    let mut ore = scene.place(stackable("ore", 5, 10, 3));

    let outcome = inv.add_item(&mut ore, &mut scene).unwrap();

    assert!(matches!(
        outcome,
        PickupOutcome::PartiallyPickedUp {
            picked: 3,
            remaining: 2,
            ..
        }
    ));
    assert_eq!(amounts(&inv), [3]);
    assert_eq!(ore.descriptor.pickup_amount, 2);
    assert!(scene.contains(ore.handle));
    assert_eq!(scene.world_item(ore.handle).unwrap().pickup_amount, 2);
    assert!(scene.calls().contains(&SceneCall::Remaining {
        handle: ore.handle,
        amount: 2,
    }));
    assert!(inv.events().iter().any(|e| matches!(
        e,
        InventoryEvent::OutOfSpace {
            requested: 5,
            picked_up: 3,
            ..
        }
    )));
}

#[test]
fn test_leftover_in_world_conserves_units() {
    let mut scene = HeadlessScene::new();
    let mut first = Inventory::new(10);
    let mut second = Inventory::new(10);
    let ore_class = ItemClassId::new("ore");
    let mut ore = scene.place(stackable("ore", 5, 10, 3));
    first.add_item(&mut ore, &mut scene).unwrap();

    // a second carrier only sees what the scene holds
    let leftover = scene.world_item(ore.handle).unwrap().clone();
    let mut again = WorldItem::new(ore.handle, leftover);
    second.add_item(&mut again, &mut scene).unwrap();

    assert_eq!(first.count_of(&ore_class) + second.count_of(&ore_class), 5);
    assert!(!scene.contains(ore.handle));
}

#[test]
fn test_full_inventory_picks_up_nothing() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(10);
    let mut sand = scene.place(stackable("sand", 10, 20, 1));
    inv.add_item(&mut sand, &mut scene).unwrap();
    assert_eq!(inv.calculate_inventory_weight(), 10);
    inv.drain_events();

    let before = inv.stacks().to_vec();
    let mut pebble = scene.place(stackable("pebble", 4, 20, 1));
    let outcome = inv.add_item(&mut pebble, &mut scene).unwrap();

    assert_eq!(outcome, PickupOutcome::OutOfSpace { requested: 4 });
    assert_eq!(inv.stacks(), &before[..]);
    assert_eq!(pebble.descriptor.pickup_amount, 4);
    assert!(scene.contains(pebble.handle));
    assert_eq!(
        inv.drain_events(),
        [InventoryEvent::OutOfSpace {
            item_class: ItemClassId::new("pebble"),
            requested: 4,
            picked_up: 0,
        }]
    );
}

#[test]
fn test_whole_pickup_destroys_world_item() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(50);
    let mut arrows = scene.place(stackable("arrow", 20, 50, 1));

    let outcome = inv.add_item(&mut arrows, &mut scene).unwrap();

    assert!(outcome.is_complete());
    assert_eq!(outcome.picked(), 20);
    assert!(!scene.contains(arrows.handle));
    assert_eq!(inv.count_of(&ItemClassId::new("arrow")), 20);
}

#[test]
fn test_pickup_merges_into_partial_stack() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);

    let mut first = scene.place(stackable("gold", 6, 10, 1));
    let mut second = scene.place(stackable("gold", 6, 10, 1));
    inv.add_item(&mut first, &mut scene).unwrap();
    let outcome = inv.add_item(&mut second, &mut scene).unwrap();

    // 4 fill the first stack, 2 stay on the new one
    assert_eq!(amounts(&inv), [10, 2]);
    match outcome {
        PickupOutcome::PickedUp { amount, new_stacks } => {
            assert_eq!(amount, 6);
            assert_eq!(new_stacks, [inv.stacks()[1].unique_id]);
        }
        other => panic!("unexpected outcome {:?}", other),
    }

    // the full stack is skipped; the next pickup lands on the partial one
    let mut third = scene.place(stackable("gold", 3, 10, 1));
    inv.add_item(&mut third, &mut scene).unwrap();
    assert_eq!(amounts(&inv), [10, 5]);
}

#[test]
fn test_pickup_merges_completely_when_it_fits() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);

    let mut first = scene.place(stackable("gold", 6, 20, 1));
    let mut second = scene.place(stackable("gold", 6, 20, 1));
    inv.add_item(&mut first, &mut scene).unwrap();
    let outcome = inv.add_item(&mut second, &mut scene).unwrap();

    assert_eq!(amounts(&inv), [12]);
    assert_eq!(
        outcome,
        PickupOutcome::PickedUp {
            amount: 6,
            new_stacks: vec![]
        }
    );
}

#[test]
fn test_oversized_pickup_is_chunked() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut feathers = scene.place(stackable("feather", 25, 10, 0));

    inv.add_item(&mut feathers, &mut scene).unwrap();

    assert_eq!(amounts(&inv), [10, 10, 5]);
    assert!(inv.stacks().iter().all(|s| s.amount <= s.max_amount));
}

#[test]
fn test_invalid_descriptor_is_rejected() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut nothing = scene.place(stackable("dust", 0, 10, 1));

    assert!(matches!(
        inv.add_item(&mut nothing, &mut scene),
        Err(InventoryError::InvalidItem(_))
    ));
    assert!(inv.is_empty());
    assert!(scene.calls().is_empty());
}

#[test]
fn test_weight_never_exceeds_capacity() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(97);
    let mut seed: u32 = 12345;
    let mut next = move |modulo: u32| {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (seed >> 16) % modulo
    };

    for round in 0..200 {
        let class = format!("item{}", next(5));
        let mut item = scene.place(stackable(&class, 1 + next(12), 1 + next(15), next(7)));
        inv.add_item(&mut item, &mut scene).unwrap();

        assert!(
            inv.calculate_inventory_weight() <= inv.total_capacity() as u64,
            "over capacity after round {}",
            round
        );
        assert!(inv.stacks().iter().all(|s| s.amount > 0 && s.amount <= s.max_amount));
    }
}

#[test]
fn test_combine_then_split_conserves_units() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut a = scene.place(stackable("gold", 6, 10, 1));
    let mut b = scene.place(stackable("gold", 6, 10, 1));
    inv.add_item(&mut a, &mut scene).unwrap();
    inv.add_item(&mut b, &mut scene).unwrap();
    let total = inv.count_of(&ItemClassId::new("gold"));

    inv.combine_stack(1, 0).unwrap();
    inv.split_stack(0, 4).unwrap();

    assert_eq!(inv.count_of(&ItemClassId::new("gold")), total);
}

#[test]
fn test_rejected_operations_leave_inventory_unchanged() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut gold = scene.place(stackable("gold", 5, 10, 1));
    let mut tin = scene.place(stackable("tin", 5, 10, 1));
    inv.add_item(&mut gold, &mut scene).unwrap();
    inv.add_item(&mut tin, &mut scene).unwrap();
    inv.drain_events();
    let before = inv.stacks().to_vec();

    assert!(inv.split_stack(0, 5).is_err());
    assert!(inv.split_stack(0, 0).is_err());
    assert!(inv.combine_stack(0, 1).is_err());
    assert!(inv.remove_from_stack(1, 6, false).is_err());
    assert!(inv.drop_item(UniqueId::from_raw(77), &mut scene).is_err());
    assert!(inv.use_item(&ItemClassId::new("silk"), &mut scene).is_err());
    assert!(inv.drop_equipped(EquipSlot::Weapon, &mut scene).is_err());

    assert_eq!(inv.stacks(), &before[..]);
    assert!(inv.events().is_empty());
}

#[test]
fn test_unique_ids_strictly_increase() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(1000);
    let mut seen = Vec::new();

    for i in 0..10 {
        let mut item = scene.place(stackable(&format!("c{}", i), 4, 4, 1));
        inv.add_item(&mut item, &mut scene).unwrap();
        seen.push(inv.stacks().last().unwrap().unique_id);
        inv.remove_from_stack(0, 0, true).unwrap();
    }
    seen.push(inv.calculate_unique_id());

    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_backpack_swap_recomputes_capacity() {
    let drop_point = Transform::from_position([0.0, 0.0, 1.0]);
    let back = Transform::from_position([0.0, 1.5, -0.2]);
    let mut scene = HeadlessScene::new()
        .with_socket("ItemSpawnSocket", drop_point)
        .with_socket("BackpackSocket", back);
    let mut inv = Inventory::new(10);

    let mut big = scene.place(backpack("big_pack", 20));
    inv.add_item(&mut big, &mut scene).unwrap();
    assert_eq!(inv.total_capacity(), 30);
    assert_eq!(inv.calculate_inventory_weight(), 0);
    scene.drain_calls();

    let mut small = scene.place(backpack("small_pack", 5));
    let outcome = inv.add_item(&mut small, &mut scene).unwrap();
    assert_eq!(inv.total_capacity(), 15);
    assert_eq!(
        inv.equipped(EquipSlot::Backpack).unwrap().item_class.name(),
        "small_pack"
    );

    let ejected = match outcome {
        PickupOutcome::Equipped {
            ejected: Some(handle),
            ..
        } => handle,
        other => panic!("unexpected outcome {:?}", other),
    };
    assert_eq!(
        scene.world_item(ejected).unwrap().item_class,
        ItemClassId::new("big_pack")
    );
    assert_eq!(
        scene.drain_calls(),
        [
            SceneCall::Detached(EquipSlot::Backpack),
            SceneCall::Spawned {
                handle: ejected,
                item_class: ItemClassId::new("big_pack"),
                amount: 1,
                origin: drop_point,
            },
            SceneCall::Attached {
                slot: EquipSlot::Backpack,
                visual: "meshes/small_pack".to_string(),
                at: back,
            },
            SceneCall::Destroyed(small.handle),
        ]
    );
    assert!(inv.events().contains(&InventoryEvent::CapacityChanged { old: 30, new: 15 }));
}

#[test]
fn test_backpack_bonus_extends_pickup() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(10);
    let mut stones = scene.place(stackable("stone", 10, 50, 2));

    inv.add_item(&mut stones, &mut scene).unwrap();
    assert_eq!(amounts(&inv), [5]);

    let mut pack = scene.place(backpack("pack", 10));
    inv.add_item(&mut pack, &mut scene).unwrap();
    inv.add_item(&mut stones, &mut scene).unwrap();

    assert_eq!(amounts(&inv), [10]);
    assert!(!scene.contains(stones.handle));
}

#[test]
fn test_weapon_and_cosmetic_slots() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(10);

    let mut sword = scene.place(ItemDescriptor::new("sword", "Sword").with_kind(ItemKind::Weapon));
    let mut hat = scene.place(ItemDescriptor::new("hat", "Hat").with_kind(ItemKind::Cosmetic));
    let first = inv.add_item(&mut sword, &mut scene).unwrap();
    inv.add_item(&mut hat, &mut scene).unwrap();

    assert!(matches!(first, PickupOutcome::Equipped { ejected: None, .. }));
    assert_eq!(inv.equipped(EquipSlot::Weapon).unwrap().name, "Sword");
    assert_eq!(inv.equipped(EquipSlot::Cosmetic).unwrap().name, "Hat");
    assert!(inv.is_empty());
    assert_eq!(inv.total_capacity(), 10);

    let mut axe = scene.place(ItemDescriptor::new("axe", "Axe").with_kind(ItemKind::Weapon));
    inv.add_item(&mut axe, &mut scene).unwrap();
    assert_eq!(inv.equipped(EquipSlot::Weapon).unwrap().name, "Axe");
    assert_eq!(scene.world_len(), 1); // the sword is back on the ground
}

#[test]
fn test_drop_equipped_clears_slot() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(10);
    let mut pack = scene.place(backpack("pack", 15));
    inv.add_item(&mut pack, &mut scene).unwrap();

    let handle = inv.drop_equipped(EquipSlot::Backpack, &mut scene).unwrap();

    assert!(inv.equipped(EquipSlot::Backpack).is_none());
    assert_eq!(inv.total_capacity(), 10);
    assert!(scene.contains(handle));
    assert_eq!(
        inv.drop_equipped(EquipSlot::Backpack, &mut scene),
        Err(InventoryError::SlotEmpty(EquipSlot::Backpack))
    );
}

#[test]
fn test_drop_item_spawns_full_stack() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut rope = scene.place(stackable("rope", 7, 10, 2));
    let mut cloth = scene.place(stackable("cloth", 2, 10, 1));
    inv.add_item(&mut rope, &mut scene).unwrap();
    inv.add_item(&mut cloth, &mut scene).unwrap();
    let rope_id = inv.stacks()[0].unique_id;

    let handle = inv.drop_item(rope_id, &mut scene).unwrap();

    assert_eq!(scene.world_item(handle).unwrap().pickup_amount, 7);
    assert_eq!(inv.len(), 1);
    assert_eq!(inv.stacks()[0].item_class.name(), "cloth");
    assert_eq!(
        inv.drop_item(rope_id, &mut scene),
        Err(InventoryError::StackNotFound(rope_id))
    );
}

#[test]
fn test_dropped_stack_can_be_picked_up_again() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut rope = scene.place(stackable("rope", 7, 10, 2));
    inv.add_item(&mut rope, &mut scene).unwrap();

    let handle = inv.drop_item(inv.stacks()[0].unique_id, &mut scene).unwrap();
    let descriptor = scene.world_item(handle).unwrap().clone();
    let mut again = WorldItem::new(handle, descriptor);
    inv.add_item(&mut again, &mut scene).unwrap();

    assert_eq!(amounts(&inv), [7]);
    assert!(!scene.contains(handle));
}

#[test]
fn test_use_item_consumes_one_unit() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    let mut potions = scene.place(stackable("potion", 3, 5, 1));
    inv.add_item(&mut potions, &mut scene).unwrap();
    scene.drain_calls();

    inv.use_item(&ItemClassId::new("potion"), &mut scene).unwrap();

    assert_eq!(amounts(&inv), [2]);
    assert_eq!(scene.calls(), &[SceneCall::UseEffect(ItemClassId::new("potion"))]);
}

#[test]
fn test_sort_by_name_is_stable_and_idempotent() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100);
    for name in ["Bravo", "alpha", "Charlie"] {
        let mut item = scene.place(stackable(name, 1, 5, 1));
        inv.add_item(&mut item, &mut scene).unwrap();
    }

    inv.sort_inventory(SortMethod::Name);
    let first: Vec<_> = inv.stacks().to_vec();
    inv.sort_inventory(SortMethod::Name);

    let names: Vec<_> = inv.stacks().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["alpha", "Bravo", "Charlie"]);
    assert_eq!(inv.stacks(), &first[..]);
}

#[test]
fn test_auto_sort_after_pickup() {
    let mut scene = HeadlessScene::new();
    let mut inv = Inventory::new(100).with_auto_sort(SortMethod::Weight);
    let mut heavy = scene.place(stackable("anvil", 1, 1, 20));
    let mut light = scene.place(stackable("leaf", 1, 10, 0));

    inv.add_item(&mut heavy, &mut scene).unwrap();
    inv.add_item(&mut light, &mut scene).unwrap();

    let names: Vec<_> = inv.stacks().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["leaf", "anvil"]);
}

#[test]
fn test_config_sockets_reach_the_scene() {
    let config = InventoryConfig::from_json_str(
        r#"{ "base_capacity": 25, "sockets": { "weapon": "hand_r" } }"#,
    )
    .unwrap();
    let hand = Transform::from_position([0.3, 1.2, 0.0]);
    let mut scene = HeadlessScene::new().with_socket("hand_r", hand);
    let mut inv = Inventory::from_config(&config);
    assert_eq!(inv.total_capacity(), 25);

    let mut bow = scene.place(
        ItemDescriptor::new("bow", "Bow")
            .with_kind(ItemKind::Weapon)
            .with_visual("meshes/bow"),
    );
    inv.add_item(&mut bow, &mut scene).unwrap();

    assert!(scene.calls().contains(&SceneCall::Attached {
        slot: EquipSlot::Weapon,
        visual: "meshes/bow".to_string(),
        at: hand,
    }));
}
