use std::rc::Rc;

use culebra::{
    ast::Position,
    error::RuntimeError,
    interpreter::{
        environment::{COLUMN, Environment, LINE},
        value::core::Value,
    },
};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn get(env: &Environment, name: &str) -> Value {
    env.get(name, Position::default())
       .unwrap_or_else(|e| panic!("lookup failed: {e}"))
}

#[test]
fn initialize_and_get() {
    let env = Environment::new();
    env.initialize("x", Value::Integer(1), false);

    assert_eq!(get(&env, "x"), Value::Integer(1));
    assert_eq!(env.get("y", Position::new(4, 2)),
               Err(RuntimeError::UndefinedVariable { name:     "y".to_string(),
                                                     position: Position::new(4, 2), }));
}

#[test]
fn assign_respects_mutability() {
    let env = Environment::new();
    env.initialize("fixed", Value::Integer(1), false);
    env.initialize("open", Value::Integer(1), true);

    assert!(env.assign("open", Value::Integer(2), Position::default()).is_ok());
    assert_eq!(get(&env, "open"), Value::Integer(2));

    assert!(matches!(env.assign("fixed", Value::Integer(2), Position::default()),
                     Err(RuntimeError::ImmutableBinding { .. })));
    assert_eq!(get(&env, "fixed"), Value::Integer(1));

    assert!(matches!(env.assign("nowhere", Value::Integer(2), Position::default()),
                     Err(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn assign_updates_the_owning_frame() {
    let outer = Environment::new();
    outer.initialize("n", Value::Integer(1), true);

    let inner = Environment::new();
    inner.append_outer(Rc::clone(&outer));
    inner.assign("n", Value::Integer(7), Position::default())
         .unwrap();

    assert_eq!(get(&outer, "n"), Value::Integer(7));
    assert!(!inner.has("missing"));
}

#[test]
fn outer_frames_are_searched_in_order_depth_first() {
    let grandparent = Environment::new();
    grandparent.initialize("y", Value::from("deep"), false);

    let first = Environment::new();
    first.initialize("x", Value::from("first"), false);
    first.append_outer(grandparent);

    let second = Environment::new();
    second.initialize("x", Value::from("second"), false);
    second.initialize("y", Value::from("second"), false);

    let env = Environment::new();
    env.append_outer(first);
    env.append_outer(second);

    assert_eq!(get(&env, "x"), Value::from("first"));
    assert_eq!(get(&env, "y"), Value::from("deep"));
}

#[test]
fn associated_object_sits_between_own_bindings_and_outers() {
    let outer = Environment::new();
    outer.initialize("count", Value::Integer(100), true);
    outer.initialize("shadowed", Value::Integer(100), false);

    let mut properties = IndexMap::new();
    properties.insert("count".to_string(), Value::Integer(0));
    properties.insert("shadowed".to_string(), Value::Integer(0));
    let object = Value::from(properties);
    let Value::Object(storage) = &object else { unreachable!() };

    let env = Environment::new();
    env.append_outer(Rc::clone(&outer));
    env.associate_object(Rc::clone(storage));
    env.initialize("shadowed", Value::Integer(-1), false);

    assert_eq!(get(&env, "count"), Value::Integer(0));
    assert_eq!(get(&env, "shadowed"), Value::Integer(-1));

    env.assign("count", Value::Integer(5), Position::default())
       .unwrap();
    assert_eq!(storage.borrow().get("count"), Some(&Value::Integer(5)));
    assert_eq!(get(&outer, "count"), Value::Integer(100));
    assert!(env.associated_object().is_some());
}

#[test]
fn call_site_reads_the_seeded_position() {
    let env = Environment::new();
    assert!(env.call_site().is_err());

    env.initialize(LINE, Value::Integer(12), false);
    env.initialize(COLUMN, Value::Integer(4), false);
    assert_eq!(env.call_site(), Ok(Position::new(12, 4)));
}
