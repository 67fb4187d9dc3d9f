//! Global built-in functions, installed into the environment before any
//! user code runs.

use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::environment::Environment;
use crate::value::{self, BuiltIn, Value};

pub(super) fn install(globals: &Environment) {
    globals.define(
        "clock",
        Value::Callable(Rc::new(BuiltIn::new("clock", 0, Rc::new(|_, _| {
            let elapsed = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("system clock is before the Unix epoch");
            Ok(Value::Number(elapsed.as_nanos() as f64 / 1e9))
        })))),
    );

    globals.define(
        "milliseconds",
        Value::Callable(Rc::new(BuiltIn::new("milliseconds", 1, Rc::new(|_, args| {
            Ok(match &args[0] {
                Value::Number(n) => {
                    let scaled = (n * 1000.0 * 100.0).round() / 100.0;
                    Value::Number(scaled)
                }
                _ => Value::None,
            })
        })))),
    );

    globals.define(
        "stringify",
        Value::Callable(Rc::new(BuiltIn::new("stringify", 1, Rc::new(|_, args| {
            Ok(Value::Str(value::stringify(&args[0])))
        })))),
    );

    globals.define(
        "type",
        Value::Callable(Rc::new(BuiltIn::new("type", 1, Rc::new(|_, args| {
            Ok(Value::Str(value::type_name(&args[0]).to_string()))
        })))),
    );
}
