//! Tests for the constructor factory.
//!
//! Copy mode flattens the template into every instance; from mode keeps a
//! live link to a private clone of the template. Construction overrides
//! land in a method's backing storage when the selector is already exposed
//! as a method, and define plain properties otherwise.

extern crate prototyped;

use prototyped::factory::Constructor;
use prototyped::model::object::ObjectRef;
use prototyped::model::operations::dispatch::{get, send};
use prototyped::model::operations::object::{
    assign, create, set_method_mut, set_property, set_property_mut,
};
use prototyped::model::value::{NumberType, Value};

fn int(i: i64) -> Value {
    Value::Number(NumberType::Integer(i))
}

fn float(f: f64) -> Value {
    Value::Number(NumberType::Float(f))
}

fn warrior() -> ObjectRef {
    set_property(
        &set_property(
            &set_property(
                &set_property(&create(), "name", Value::String("Warrior".to_string())),
                "energy",
                int(100),
            ),
            "defense",
            int(10),
        ),
        "offense",
        int(30),
    )
}

#[test]
fn test_from_mode_builds_instances_over_the_template() {
    let constructor = Constructor::from(&warrior());
    let one = constructor
        .construct(vec![
            ("energy", int(200)),
            ("defense", int(42)),
            ("offense", int(15)),
        ])
        .unwrap();

    assert_eq!(get(&one, "energy").unwrap().as_integer(), Some(200));
    assert_eq!(get(&one, "defense").unwrap().as_integer(), Some(42));
    assert_eq!(get(&one, "offense").unwrap().as_integer(), Some(15));
    // Untouched selectors delegate to the private template clone.
    assert_eq!(get(&one, "name").unwrap().as_str(), Some("Warrior"));
}

#[test]
fn test_from_mode_instances_can_assign_values() {
    let constructor = Constructor::from(&warrior());
    let one = constructor.construct(vec![]).unwrap();

    assign(&one, "name", Value::String("Other".to_string()));
    assert_eq!(get(&one, "name").unwrap().as_str(), Some("Other"));
}

#[test]
fn test_unrecognized_selectors_become_properties() {
    let constructor = Constructor::from(&warrior());
    let one = constructor.construct(vec![("fruit", int(42))]).unwrap();
    assert_eq!(get(&one, "fruit").unwrap().as_integer(), Some(42));
}

#[test]
fn test_from_mode_keeps_existing_instances_on_their_private_clone() {
    let template = warrior();
    let constructor = Constructor::from(&template);
    let before = constructor.construct(vec![]).unwrap();

    set_property_mut(&template, "energy", int(500));
    let after = constructor.construct(vec![]).unwrap();

    assert_eq!(get(&before, "energy").unwrap().as_integer(), Some(100));
    assert_eq!(get(&after, "energy").unwrap().as_integer(), Some(500));
}

#[test]
fn test_copy_mode_flattens_methods_and_properties() {
    let proto = warrior();
    set_method_mut(&proto, "take_damage", |scope, args| {
        let damage = args[0].as_float().unwrap();
        let energy = scope.get("energy")?.as_float().unwrap();
        scope.set("energy", float(energy - damage));
        Ok(Value::Null)
    });
    set_method_mut(&proto, "attack", |scope, args| {
        let other = args[0].as_object().unwrap().clone();
        let defense = get(&other, "defense")?.as_float().unwrap();
        let offense = scope.get("offense")?.as_float().unwrap();
        if defense < offense {
            send(&other, "take_damage", vec![float(offense - defense)])?;
        }
        Ok(Value::Null)
    });
    set_method_mut(&proto, "other_method", |_scope, _args| Ok(int(42)));

    let constructor = Constructor::copy(&proto);
    let one = constructor.construct(vec![]).unwrap();

    send(&proto, "attack", vec![Value::Object(one.clone())]).unwrap();
    assert_eq!(get(&one, "energy").unwrap().as_float(), Some(80.0));
    assert_eq!(get(&proto, "other_method").unwrap().as_integer(), Some(42));
    assert_eq!(get(&one, "other_method").unwrap().as_integer(), Some(42));
}

#[test]
fn test_copy_mode_instances_share_no_mutable_storage() {
    let constructor = Constructor::copy(&warrior());
    let one = constructor.construct(vec![]).unwrap();
    let two = constructor.construct(vec![]).unwrap();

    set_property_mut(&one, "energy", int(1));
    assert_eq!(get(&one, "energy").unwrap().as_integer(), Some(1));
    assert_eq!(get(&two, "energy").unwrap().as_integer(), Some(100));
}

#[test]
fn test_copy_mode_snapshot_ignores_later_template_edits() {
    let template = warrior();
    let constructor = Constructor::copy(&template);

    set_property_mut(&template, "energy", int(999));
    let instance = constructor.construct(vec![]).unwrap();

    assert_eq!(get(&instance, "energy").unwrap().as_integer(), Some(100));
}

#[test]
fn test_extend_with_specializes_the_template() {
    let constructor = Constructor::from(&warrior());
    let swordsman_constructor = constructor.extend_with(|instance| {
        set_property_mut(instance, "skill", int(0));
        set_property_mut(instance, "sword_power", int(0));
        set_method_mut(instance, "offense", |scope, _args| {
            let base = scope.this_field("offense").as_float().unwrap_or(0.0);
            let sword = scope.get("sword_power")?.as_float().unwrap();
            let skill = scope.get("skill")?.as_float().unwrap();
            Ok(float(base + sword * skill))
        });
        Ok(())
    });

    let swordsman = swordsman_constructor
        .construct(vec![
            ("energy", int(42)),
            ("offense", int(30)),
            ("defense", int(10)),
            ("skill", float(0.5)),
            ("sword_power", int(30)),
        ])
        .unwrap();

    // The offense override landed in the method's backing storage.
    assert_eq!(get(&swordsman, "offense").unwrap().as_float(), Some(45.0));
    assert_eq!(
        get(&swordsman, "sword_power").unwrap().as_integer(),
        Some(30)
    );
    assert_eq!(get(&swordsman, "energy").unwrap().as_integer(), Some(42));

    // The unextended template still constructs plain warriors.
    let plain = constructor.construct(vec![]).unwrap();
    assert_eq!(get(&plain, "offense").unwrap().as_integer(), Some(30));
}

#[test]
fn test_construct_override_into_backing_keeps_the_method() {
    let proto = set_property(&create(), "level", int(1));
    set_method_mut(&proto, "level", |scope, _args| {
        let backing = scope.this_field("level").as_integer().unwrap();
        Ok(int(backing * 10))
    });

    let constructor = Constructor::copy(&proto);
    let instance = constructor.construct(vec![("level", int(4))]).unwrap();

    assert_eq!(get(&instance, "level").unwrap().as_integer(), Some(40));
}
