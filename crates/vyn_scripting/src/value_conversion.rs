use vyn_shared::types::Result;

use crate::{ScriptError, ScriptRuntime, ScriptValue};

//trait to easily convert Rust types to script values (just call .to_script_value() on the type)
pub trait IntoScriptValue<V: ScriptValue> {
    fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V>;
}

macro_rules! impl_value_conversion {
    (integer, $type:ty) => {
        impl<V: ScriptValue> IntoScriptValue<V> for $type {
            fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
                let value = i64::try_from(*self).map_err(|err| {
                    ScriptError::Conversion(format!("{} does not fit an integer: {err}", self))
                })?;
                V::new_integer(ctx, value)
            }
        }
    };

    (number, $type:ty) => {
        impl<V: ScriptValue> IntoScriptValue<V> for $type {
            fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
                V::new_number(ctx, f64::from(*self))
            }
        }
    };
}

impl_value_conversion!(integer, i8);
impl_value_conversion!(integer, i16);
impl_value_conversion!(integer, i32);
impl_value_conversion!(integer, i64);
impl_value_conversion!(integer, isize);
impl_value_conversion!(integer, u8);
impl_value_conversion!(integer, u16);
impl_value_conversion!(integer, u32);
impl_value_conversion!(integer, u64);
impl_value_conversion!(integer, usize);
impl_value_conversion!(number, f32);
impl_value_conversion!(number, f64);

impl<V: ScriptValue> IntoScriptValue<V> for &str {
    fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
        V::new_string(ctx, self)
    }
}

impl<V: ScriptValue> IntoScriptValue<V> for String {
    fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
        V::new_string(ctx, self)
    }
}

impl<V: ScriptValue> IntoScriptValue<V> for bool {
    fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
        V::new_bool(ctx, *self)
    }
}

impl<V: ScriptValue> IntoScriptValue<V> for () {
    fn to_script_value(&self, ctx: <V::RT as ScriptRuntime>::Context) -> Result<V> {
        V::new_nil(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostContext, HostValue};

    #[test]
    fn rust_values_convert() {
        let ctx = HostContext::default();

        let v: HostValue = "Main".to_script_value(ctx.clone()).unwrap();
        assert_eq!(v, HostValue::String("Main".into()));

        let v: HostValue = 800u32.to_script_value(ctx.clone()).unwrap();
        assert_eq!(v, HostValue::Integer(800));

        let v: HostValue = (-600i16).to_script_value(ctx.clone()).unwrap();
        assert_eq!(v, HostValue::Integer(-600));

        let v: HostValue = 1.5f32.to_script_value(ctx.clone()).unwrap();
        assert_eq!(v, HostValue::Number(1.5));

        let v: HostValue = true.to_script_value(ctx.clone()).unwrap();
        assert_eq!(v, HostValue::Bool(true));

        let v: HostValue = ().to_script_value(ctx).unwrap();
        assert_eq!(v, HostValue::Nil);
    }

    #[test]
    fn out_of_range_integer() {
        let ctx = HostContext::default();
        let res: Result<HostValue> = u64::MAX.to_script_value(ctx);
        assert!(res.is_err());
    }
}
