use serde_json::Value;
use sqlx::{
    Decode, Postgres, Type, TypeInfo, ValueRef,
    error::BoxDynError,
    postgres::{PgTypeInfo, PgValueRef},
};

/// A loosely-typed list column (`images`, `videos`, `amenities`).
///
/// Admin databases store these as plain text, native text arrays, or JSON,
/// depending on which tool wrote them. Decoding normalizes every shape into a
/// [`serde_json::Value`]:
///
/// - `TEXT[]` / `VARCHAR[]` become `Value::Array` of strings, with SQL nulls
///   kept as `Value::Null`
/// - `JSON` / `JSONB` become the stored JSON value
/// - any text type becomes `Value::String`
#[derive(Debug, Clone, PartialEq)]
pub struct FlexibleArray(pub Value);

impl FlexibleArray {
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl Type<Postgres> for FlexibleArray {
    fn type_info() -> PgTypeInfo {
        PgTypeInfo::with_name("TEXT")
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<Postgres>>::compatible(ty)
            || <Vec<String> as Type<Postgres>>::compatible(ty)
            || <Value as Type<Postgres>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Postgres> for FlexibleArray {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let ty = value.type_info().into_owned();

        if <Value as Type<Postgres>>::compatible(&ty) {
            let json = <Value as Decode<Postgres>>::decode(value)?;
            return Ok(Self(json));
        }

        if <Vec<String> as Type<Postgres>>::compatible(&ty) {
            let items = <Vec<Option<String>> as Decode<Postgres>>::decode(value)?;
            let items = items
                .into_iter()
                .map(|item| item.map_or(Value::Null, Value::String))
                .collect();
            return Ok(Self(Value::Array(items)));
        }

        let text = <String as Decode<Postgres>>::decode(value).map_err(|e| {
            format!("unsupported column type {} for list field: {}", ty.name(), e)
        })?;
        Ok(Self(Value::String(text)))
    }
}

impl From<Value> for FlexibleArray {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

