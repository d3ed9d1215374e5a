//! Fluent construction of one record of the tree

use crate::value::{ConfigValue, Record};
use tooling::config::{
    get_env_enabled, get_env_f64_or, get_env_first, get_env_int_or, get_env_or, get_env_present,
    EnvSource,
};

/// Accumulates the fields of a record, reading each from the environment
/// with its coercion rule
pub(crate) struct Section<'e, E: ?Sized> {
    env: &'e E,
    fields: Record,
}

impl<'e, E: EnvSource + ?Sized> Section<'e, E> {
    pub(crate) fn new(env: &'e E) -> Self {
        Self {
            env,
            fields: Record::new(),
        }
    }

    /// String field: raw value if non-empty, else `default`
    pub(crate) fn text(self, name: &str, key: &str, default: impl Into<String>) -> Self {
        let value = get_env_or(self.env, key, default);
        self.value(name, value)
    }

    /// String field with fallback variables tried in order
    pub(crate) fn text_chain(self, name: &str, keys: &[&str], default: &str) -> Self {
        let value = get_env_first(self.env, keys).unwrap_or_else(|| default.to_string());
        self.value(name, value)
    }

    /// Integer field read from the leading digits; no number means `default`
    pub(crate) fn int(self, name: &str, key: &str, default: i64) -> Self {
        let value = get_env_int_or(self.env, key, default);
        self.value(name, value)
    }

    /// Decimal field read from the leading literal; no number means `default`
    pub(crate) fn float(self, name: &str, key: &str, default: f64) -> Self {
        let value = get_env_f64_or(self.env, key, default);
        self.value(name, value)
    }

    /// Enabled unless the variable is exactly `"false"`
    pub(crate) fn enabled(self, name: &str, key: &str) -> Self {
        let value = get_env_enabled(self.env, key);
        self.value(name, value)
    }

    /// True iff the variable is set and non-empty
    pub(crate) fn present(self, name: &str, key: &str) -> Self {
        let value = get_env_present(self.env, key);
        self.value(name, value)
    }

    /// Fixed list of strings
    pub(crate) fn strings(self, name: &str, items: &[&str]) -> Self {
        self.value(name, ConfigValue::strings(items.iter().copied()))
    }

    /// Fixed value, not read from the environment
    pub(crate) fn value(mut self, name: &str, value: impl Into<ConfigValue>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Nested record built by `build`
    pub(crate) fn section<F>(self, name: &str, build: F) -> Self
    where
        F: FnOnce(Section<'e, E>) -> Section<'e, E>,
    {
        let nested = build(Section::new(self.env)).finish();
        self.value(name, nested)
    }

    pub(crate) fn finish(self) -> ConfigValue {
        ConfigValue::Record(self.fields)
    }

    pub(crate) fn into_record(self) -> Record {
        self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooling::config::MapEnv;

    #[test]
    fn test_section_coercions() {
        let env = MapEnv::new()
            .with("NAME", "Acme")
            .with("COUNT", "x")
            .with("PRICE", "4.5")
            .with("FLAG", "false")
            .with("KEY", "pk");

        let record = Section::new(&env)
            .text("name", "NAME", "default")
            .int("count", "COUNT", 3)
            .float("price", "PRICE", 1.0)
            .enabled("flag", "FLAG")
            .present("key", "KEY")
            .present("other", "OTHER")
            .into_record();

        assert_eq!(record["name"], ConfigValue::from("Acme"));
        assert_eq!(record["count"], ConfigValue::from(3_i64));
        assert_eq!(record["price"], ConfigValue::from(4.5));
        assert_eq!(record["flag"], ConfigValue::from(false));
        assert_eq!(record["key"], ConfigValue::from(true));
        assert_eq!(record["other"], ConfigValue::from(false));
    }

    #[test]
    fn test_nested_section() {
        let env = MapEnv::new().with("INNER", "v");
        let value = Section::new(&env)
            .section("outer", |s| s.text("inner", "INNER", "d"))
            .finish();

        let inner = value.as_record().and_then(|r| r.get("outer"));
        assert_eq!(
            inner.and_then(ConfigValue::as_record).map(|r| r["inner"].clone()),
            Some(ConfigValue::from("v"))
        );
    }

    #[test]
    fn test_text_chain_order() {
        let env = MapEnv::new().with("B", "second");
        let record = Section::new(&env)
            .text_chain("url", &["A", "B"], "fallback")
            .text_chain("none", &["A"], "fallback")
            .into_record();
        assert_eq!(record["url"], ConfigValue::from("second"));
        assert_eq!(record["none"], ConfigValue::from("fallback"));
    }
}
