//! Tests for multi-prototype resolution.
//!
//! `set_prototypes` installs the last argument as the primary prototype
//! and the preceding ones as the auxiliary hierarchy, consulted only when
//! the primary cannot answer, with last-direct-answer-wins tie-breaking.

extern crate prototyped;

use prototyped::model::error::ProtoError;
use prototyped::model::operations::dispatch::{get, send};
use prototyped::model::operations::object::{
    create, create_with, set_method_mut, set_prototype, set_prototypes,
};
use prototyped::model::selector::Selector;
use prototyped::model::value::{NumberType, Value};

fn int(i: i64) -> Value {
    Value::Number(NumberType::Integer(i))
}

#[test]
fn test_delegates_across_many_prototypes() {
    let distance = create_with(|scope| {
        scope.set("kms", int(10));
        Ok(())
    })
    .unwrap();
    let runner = create_with(|scope| {
        scope.set(
            "run",
            Value::callable(|_scope, args| {
                let d = args[0].as_object().unwrap().clone();
                let kms = get(&d, "kms")?.as_integer().unwrap();
                Ok(Value::String(format!("running {} kms", kms)))
            }),
        );
        scope.set(
            "leisure",
            Value::callable(|_scope, _args| Ok(Value::String("playing fifa".to_string()))),
        );
        Ok(())
    })
    .unwrap();

    let subject = create_with(|scope| {
        scope.set("name", Value::String("Algebra".to_string()));
        Ok(())
    })
    .unwrap();
    let student = create_with(|scope| {
        scope.set(
            "study",
            Value::callable(|_scope, args| {
                let m = args[0].as_object().unwrap().clone();
                let name = get(&m, "name")?.as_str().unwrap().to_string();
                Ok(Value::String(format!("studying {}", name)))
            }),
        );
        scope.set(
            "leisure",
            Value::callable(|_scope, _args| Ok(Value::String("playing guitar".to_string()))),
        );
        Ok(())
    })
    .unwrap();

    let blank = create();
    let prototyped = set_prototypes(&create(), &[runner, blank, student]);

    let studying = send(&prototyped, "study", vec![Value::Object(subject)]).unwrap();
    assert_eq!(studying.as_str(), Some("studying Algebra"));

    let running = send(&prototyped, "run", vec![Value::Object(distance)]).unwrap();
    assert_eq!(running.as_str(), Some("running 10 kms"));

    // Both the runner (hierarchy) and the student (primary) answer
    // leisure; the primary prototype takes precedence.
    let leisure = send(&prototyped, "leisure", vec![]).unwrap();
    assert_eq!(leisure.as_str(), Some("playing guitar"));
}

#[test]
fn test_last_direct_answer_wins_within_the_hierarchy() {
    let first = create_with(|scope| {
        scope.set("hobby", Value::String("chess".to_string()));
        Ok(())
    })
    .unwrap();
    let second = create_with(|scope| {
        scope.set("hobby", Value::String("go".to_string()));
        Ok(())
    })
    .unwrap();
    let primary = create();

    let obj = set_prototypes(&create(), &[first, second, primary]);
    assert_eq!(get(&obj, "hobby").unwrap().as_str(), Some("go"));
}

#[test]
fn test_primary_answers_transitively_before_the_hierarchy() {
    let ancestor = create();
    set_method_mut(&ancestor, "speak", |_scope, _args| {
        Ok(Value::String("deep".to_string()))
    });
    // The primary itself has no answer; its own prototype does.
    let primary = set_prototype(&create(), &ancestor);

    let member = create();
    set_method_mut(&member, "speak", |_scope, _args| {
        Ok(Value::String("shallow".to_string()))
    });

    let obj = set_prototypes(&create(), &[member, primary]);
    assert_eq!(send(&obj, "speak", vec![]).unwrap().as_str(), Some("deep"));
}

#[test]
fn test_hierarchy_members_are_not_walked_transitively() {
    let ancestor = create_with(|scope| {
        scope.set("hidden", int(1));
        Ok(())
    })
    .unwrap();
    // The selector sits behind a hierarchy member, not on it.
    let member = set_prototype(&create(), &ancestor);
    let primary = create();

    let obj = set_prototypes(&create(), &[member, primary]);
    let err = send(&obj, "hidden", vec![]).unwrap_err();
    assert_eq!(err, ProtoError::NotFound(Selector::new("hidden")));
}

#[test]
fn test_set_prototypes_leaves_the_receiver_untouched() {
    let answerer = create_with(|scope| {
        scope.set("answer", int(42));
        Ok(())
    })
    .unwrap();

    let original = create();
    let linked = set_prototypes(&original, &[answerer]);

    assert_eq!(get(&linked, "answer").unwrap().as_integer(), Some(42));
    assert!(get(&original, "answer").is_err());
}
