// Pattern 1: Decoration - constructor, method and property wrapping
// Attaches logging and result filtering to existing types without touching
// their own logic. Each decorator is a plain function that takes a behavior
// and hands back an augmented one.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;

use crate::console::Console;
use crate::error::Result;

/// Last path segment of `T`'s type name without generic arguments, e.g.
/// `Fruit` or `Vec` for `Vec<Fruit>`.
pub fn type_name_of<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

// ============================================================================
// Constructor decoration
// ============================================================================

/// Constructor arguments, as seen by [`log_construction`]. Multi-argument
/// constructors take a tuple; only the first element is reported.
pub trait FirstArg {
    fn first_arg(&self) -> String;
}

macro_rules! impl_first_arg {
    ($($ty:ty),+ $(,)?) => {
        $(impl FirstArg for $ty {
            fn first_arg(&self) -> String {
                self.to_string()
            }
        })+
    };
}

impl_first_arg!(
    &str, String, char, bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64,
);

impl<A: fmt::Display, B> FirstArg for (A, B) {
    fn first_arg(&self) -> String {
        self.0.to_string()
    }
}

impl<A: fmt::Display, B, C> FirstArg for (A, B, C) {
    fn first_arg(&self) -> String {
        self.0.to_string()
    }
}

/// Wraps `constructor` so every construction announces itself.
///
/// The wrapped constructor returns exactly what `constructor` returns; the
/// only addition is the `New {arg} {Type} created!` line.
pub fn log_construction<A, T, F>(console: Console, constructor: F) -> impl Fn(A) -> T
where
    A: FirstArg,
    F: Fn(A) -> T,
{
    move |args: A| {
        console.line(format!(
            "New {} {} created!",
            args.first_arg(),
            type_name_of::<T>()
        ));
        constructor(args)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fruit {
    pub fruit_name: String,
}

impl Fruit {
    pub fn new(fruit_name: &str) -> Self {
        Self {
            fruit_name: fruit_name.to_string(),
        }
    }
}

// ============================================================================
// Method decoration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: u32,
    pub username: String,
    pub password: String,
}

pub fn sample_users() -> Vec<UserData> {
    vec![
        UserData {
            id: 1,
            username: "0xware".to_string(),
            password: "showmemore".to_string(),
        },
        UserData {
            id: 2,
            username: "biggaji".to_string(),
            password: "showmegoodness".to_string(),
        },
    ]
}

pub struct UserService {
    users: Vec<UserData>,
}

impl UserService {
    pub fn new(users: Vec<UserData>) -> Self {
        Self { users }
    }

    /// All users with `user_id`; empty when nobody matches.
    pub async fn get_user_info(&self, user_id: u32) -> Vec<UserData> {
        tokio::task::yield_now().await;
        self.users
            .iter()
            .filter(|user| user.id == user_id)
            .cloned()
            .collect()
    }
}

impl Default for UserService {
    fn default() -> Self {
        Self::new(sample_users())
    }
}

/// An async operation whose results lose the listed properties.
pub struct ExcludeProperties<F> {
    properties: Vec<String>,
    inner: F,
}

pub fn exclude_properties<F>(properties: &[&str], inner: F) -> ExcludeProperties<F> {
    ExcludeProperties {
        properties: properties.iter().map(|p| p.to_string()).collect(),
        inner,
    }
}

impl<F> ExcludeProperties<F> {
    pub fn properties(&self) -> &[String] {
        &self.properties
    }

    /// Awaits the wrapped operation, then strips the excluded properties.
    pub async fn call<A, Fut, T>(&self, arg: A) -> Result<Value>
    where
        F: Fn(A) -> Fut,
        Fut: Future<Output = T>,
        T: Serialize,
    {
        let results = (self.inner)(arg).await;
        let mut value = serde_json::to_value(results)?;
        strip_properties(&mut value, &self.properties);
        tracing::debug!(excluded = ?self.properties, "stripped properties from result");
        Ok(value)
    }
}

/// Removes `properties` from an object, or from every object in an array.
/// Absent properties and non-object entries are left alone.
pub fn strip_properties(value: &mut Value, properties: &[String]) {
    match value {
        Value::Array(entries) => {
            for entry in entries.iter_mut() {
                if let Value::Object(map) = entry {
                    for property in properties {
                        map.remove(property);
                    }
                }
            }
        }
        Value::Object(map) => {
            for property in properties {
                map.remove(property);
            }
        }
        _ => {}
    }
}

// ============================================================================
// Property decoration
// ============================================================================

/// Types whose listed properties are announced when the type is declared.
pub trait DecoratedProperties {
    const PROPERTIES: &'static [&'static str];
}

/// Implements [`DecoratedProperties`] for a type, checking that each named
/// property is a real field.
#[macro_export]
macro_rules! decorated_properties {
    ($owner:ty : $($prop:ident),+ $(,)?) => {
        impl $crate::decorators::DecoratedProperties for $owner {
            const PROPERTIES: &'static [&'static str] = &[$(stringify!($prop)),+];
        }

        const _: () = {
            #[allow(dead_code)]
            fn check_fields(owner: &$owner) {
                $(let _ = &owner.$prop;)+
            }
        };
    };
}

/// Emits one line per decorated property of `T`. Storage and accessors are
/// untouched.
pub fn declare_properties<T: DecoratedProperties>(console: &Console) {
    for property in T::PROPERTIES {
        console.line(format!(
            "The property {} was added to the class {}",
            property,
            type_name_of::<T>()
        ));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Yogurt {
    pub flavour: String,
}

impl Yogurt {
    pub fn new(flavour: &str) -> Self {
        Self {
            flavour: flavour.to_string(),
        }
    }
}

decorated_properties!(Yogurt: flavour);

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    struct Basket<T> {
        items: Vec<T>,
    }

    impl<T> Basket<T> {
        fn new(_label: &str) -> Self {
            Self { items: Vec::new() }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Smoothie {
        fruit: String,
        millilitres: u32,
    }

    impl Smoothie {
        fn new(fruit: String, millilitres: u32) -> Self {
            Self { fruit, millilitres }
        }
    }

    #[test]
    fn test_type_name_is_short() {
        assert_eq!(type_name_of::<Fruit>(), "Fruit");
        assert_eq!(type_name_of::<Yogurt>(), "Yogurt");
    }

    #[test]
    fn test_type_name_drops_generic_arguments() {
        assert_eq!(type_name_of::<Basket<Fruit>>(), "Basket");
        assert_eq!(type_name_of::<Vec<Fruit>>(), "Vec");
        assert_eq!(type_name_of::<Option<Basket<Yogurt>>>(), "Option");
    }

    #[test]
    fn test_log_construction_generic_type() {
        let console = Console::capture();
        let new_basket = log_construction(console.clone(), Basket::<Fruit>::new);

        let basket = new_basket("Picnic");
        assert!(basket.items.is_empty());
        assert_eq!(console.lines(), vec!["New Picnic Basket created!"]);
    }

    #[test]
    fn test_log_construction_multiple_arguments() {
        let console = Console::capture();
        let new_smoothie = log_construction(console.clone(), |(fruit, ml): (String, u32)| {
            Smoothie::new(fruit, ml)
        });

        let smoothie = new_smoothie(("Mango".to_string(), 350));
        assert_eq!(smoothie, Smoothie::new("Mango".to_string(), 350));
        assert_eq!(smoothie.fruit, "Mango");
        assert_eq!(smoothie.millilitres, 350);
        assert_eq!(console.lines(), vec!["New Mango Smoothie created!"]);

        let new_label = log_construction(console.clone(), |(id, _, _): (u32, String, bool)| {
            Fruit::new(&id.to_string())
        });
        new_label((7, "unused".to_string(), true));
        assert_eq!(console.lines()[1], "New 7 Fruit created!");
    }

    #[test]
    fn test_log_construction_announces_each_instance() {
        let console = Console::capture();
        let new_fruit = log_construction(console.clone(), Fruit::new);

        let apple = new_fruit("Apple");
        let orange = new_fruit("Orange");

        assert_eq!(apple, Fruit::new("Apple"));
        assert_eq!(orange.fruit_name, "Orange");
        assert_eq!(
            console.lines(),
            vec!["New Apple Fruit created!", "New Orange Fruit created!"]
        );
    }

    #[tokio::test]
    async fn test_get_user_info_filters_by_id() {
        let service = UserService::default();
        let found = service.get_user_info(2).await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].username, "biggaji");
        assert!(service.get_user_info(42).await.is_empty());
    }

    #[tokio::test]
    async fn test_exclude_properties_strips_username() {
        let service = UserService::default();
        let get_user_info = exclude_properties(&["username"], |id| service.get_user_info(id));

        let result = get_user_info.call(1).await.unwrap();
        assert_eq!(result, json!([{ "id": 1, "password": "showmemore" }]));
    }

    #[tokio::test]
    async fn test_exclude_multiple_properties() {
        let service = UserService::default();
        let get_user_info =
            exclude_properties(&["username", "password"], |id| service.get_user_info(id));

        let result = get_user_info.call(2).await.unwrap();
        assert_eq!(result, json!([{ "id": 2 }]));
    }

    #[tokio::test]
    async fn test_exclude_missing_property_is_noop() {
        let service = UserService::default();
        let get_user_info = exclude_properties(&["email"], |id| service.get_user_info(id));

        let result = get_user_info.call(1).await.unwrap();
        assert_eq!(
            result,
            json!([{ "id": 1, "username": "0xware", "password": "showmemore" }])
        );
    }

    #[tokio::test]
    async fn test_exclude_on_single_object_result() {
        let lookup = exclude_properties(&["password"], |id: u32| async move {
            sample_users().into_iter().find(|user| user.id == id)
        });

        let result = lookup.call(1).await.unwrap();
        assert_eq!(result, json!({ "id": 1, "username": "0xware" }));

        // Nothing found serializes to null and passes through untouched.
        assert_eq!(lookup.call(9).await.unwrap(), Value::Null);
    }

    #[test]
    fn test_declare_properties() {
        let console = Console::capture();
        declare_properties::<Yogurt>(&console);

        let yogurt = Yogurt::new("vanila");
        assert_eq!(yogurt.flavour, "vanila");
        assert_eq!(
            console.lines(),
            vec!["The property flavour was added to the class Yogurt"]
        );
    }

    proptest! {
        #[test]
        fn prop_wrapped_constructor_matches_plain(name in "\\PC{0,16}") {
            let console = Console::capture();
            let new_fruit = log_construction(console.clone(), Fruit::new);

            let fruit = new_fruit(name.as_str());
            prop_assert_eq!(fruit, Fruit::new(&name));

            let lines = console.lines();
            prop_assert_eq!(lines.len(), 1);
            prop_assert!(lines[0].contains(name.as_str()));
            prop_assert!(lines[0].contains("Fruit"));
        }

        #[test]
        fn prop_strip_removes_only_named_properties(
            entry in proptest::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..8),
            excluded in proptest::collection::vec("[a-z]{1,6}", 0..4),
        ) {
            let original: serde_json::Map<String, Value> = entry
                .iter()
                .map(|(k, v)| (k.clone(), json!(v)))
                .collect();
            let mut value = Value::Array(vec![Value::Object(original.clone())]);

            strip_properties(&mut value, &excluded);

            let stripped = value[0].as_object().unwrap();
            for name in &excluded {
                prop_assert!(!stripped.contains_key(name));
            }
            for (key, v) in &original {
                if !excluded.contains(key) {
                    prop_assert_eq!(stripped.get(key), Some(v));
                }
            }
        }
    }
}
