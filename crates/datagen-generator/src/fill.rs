//! Signature-driven argument filling.
//!
//! Synthesizes an argument list from the declared type of each parameter and
//! calls the target with it. Two entry points share one type mapping:
//!
//! - [`fill_params`] / [`fill_and_call`] take a runtime [`Signature`] whose
//!   parameters may or may not declare a [`DataKind`].
//! - [`fill_randomly`] takes a Rust closure or function; its parameter types
//!   must implement [`FillArg`], so every parameter is typed at compile time.
//!
//! Mapping: strings get length [`DEFAULT_STRING_LENGTH`], URLs get length
//! [`DEFAULT_URL_LENGTH`], every other kind goes through the dispatcher with
//! no size hint.

use crate::generators::random_data;
use datagen_core::{DataKind, GeneratedValue, GeneratorError, IpAddress, Result, Url};
use rand::Rng;
use serde_json::{Map, Value};
use tracing::debug;

/// Length of generated string arguments.
pub const DEFAULT_STRING_LENGTH: usize = 10;

/// Length of generated URL arguments.
pub const DEFAULT_URL_LENGTH: usize = 15;

/// Generate an argument for a parameter declared as `kind`.
pub fn generate_for_kind<R: Rng>(rng: &mut R, kind: DataKind) -> Result<GeneratedValue> {
    match kind {
        DataKind::Str => random_data(rng, kind, DEFAULT_STRING_LENGTH),
        DataKind::Url => random_data(rng, kind, DEFAULT_URL_LENGTH),
        _ => random_data(rng, kind, 0),
    }
}

/// A declared parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub kind: Option<DataKind>,
}

impl Param {
    pub fn typed(name: impl Into<String>, kind: DataKind) -> Self {
        Self {
            name: name.into(),
            kind: Some(kind),
        }
    }

    pub fn untyped(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: None,
        }
    }
}

/// Ordered parameter list of a callable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    pub fn new(params: Vec<Param>) -> Self {
        Self { params }
    }

    /// Append a typed parameter.
    pub fn param(mut self, name: impl Into<String>, kind: DataKind) -> Self {
        self.params.push(Param::typed(name, kind));
        self
    }

    /// Parse a comma-separated list such as `"name: str, homepage: url, id"`.
    ///
    /// A parameter without `: type` is kept as untyped; filling it fails later.
    pub fn parse(text: &str) -> Result<Self> {
        let mut params = Vec::new();

        for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (name, kind) = match part.split_once(':') {
                Some((name, ty)) => (name.trim(), Some(ty.trim().parse::<DataKind>()?)),
                None => (part, None),
            };
            if name.is_empty() {
                return Err(GeneratorError::ValueInvalid(format!(
                    "parameter '{part}' has no name"
                )));
            }
            params.push(Param {
                name: name.to_string(),
                kind,
            });
        }

        Ok(Self { params })
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Generate one argument per parameter, in order.
pub fn fill_params<R: Rng>(rng: &mut R, signature: &Signature) -> Result<Vec<GeneratedValue>> {
    signature
        .params
        .iter()
        .map(|param| {
            let kind = param.kind.ok_or_else(|| {
                GeneratorError::ValueInvalid(format!(
                    "parameter `{}` must declare a type",
                    param.name
                ))
            })?;
            debug!(param = %param.name, %kind, "Filling parameter");
            generate_for_kind(rng, kind)
        })
        .collect()
}

/// Fill the arguments for `signature` and call `f` with them.
pub fn fill_and_call<R, F, T>(rng: &mut R, signature: &Signature, f: F) -> Result<T>
where
    R: Rng,
    F: FnOnce(Vec<GeneratedValue>) -> T,
{
    let args = fill_params(rng, signature)?;
    Ok(f(args))
}

/// A Rust type that can be generated as an argument.
pub trait FillArg: Sized {
    /// Kind used to generate values of this type.
    const KIND: DataKind;

    /// Extract `Self` from a value generated for [`Self::KIND`].
    fn from_value(value: GeneratedValue) -> Option<Self>;

    /// Generate a value of this type.
    fn fill<R: Rng>(rng: &mut R) -> Result<Self> {
        let value = generate_for_kind(rng, Self::KIND)?;
        let kind = value.kind();
        Self::from_value(value).ok_or_else(|| {
            GeneratorError::TypeUnknown(format!(
                "generator for '{}' produced a '{kind}' value",
                Self::KIND
            ))
        })
    }
}

macro_rules! impl_fill_arg {
    ($($Ty:ty => $Kind:ident($Variant:ident)),+ $(,)?) => {
        $(
            impl FillArg for $Ty {
                const KIND: DataKind = DataKind::$Kind;

                #[inline]
                fn from_value(value: GeneratedValue) -> Option<Self> {
                    match value {
                        GeneratedValue::$Variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )+
    }
}

impl_fill_arg!(
    i64 => Int(Int),
    f64 => Float(Float),
    String => Str(String),
    bool => Bool(Bool),
    IpAddress => Ip(Ip),
    Url => Url(Url),
    Map<String, Value> => Object(Object),
);

/// A callable whose parameters can all be generated.
///
/// Implemented for every `FnOnce` of up to six [`FillArg`] parameters.
pub trait FillFn<Args, Output> {
    /// Generate the arguments and call `self`.
    fn call_filled<R: Rng>(self, rng: &mut R) -> Result<Output>;
}

macro_rules! impl_fill_fn {
    ($($Ty:ident $arg:ident),*) => {
        impl<Func, Output, $($Ty,)*> FillFn<($($Ty,)*), Output> for Func
        where
            Func: FnOnce($($Ty),*) -> Output,
            $($Ty: FillArg,)*
        {
            #[allow(unused_variables)]
            fn call_filled<R: Rng>(self, rng: &mut R) -> Result<Output> {
                $(
                    let kind = <$Ty as FillArg>::KIND;
                    debug!(%kind, "Filling argument");
                    let $arg = <$Ty as FillArg>::fill(rng)?;
                )*
                Ok(self($($arg),*))
            }
        }
    }
}

impl_fill_fn!();
impl_fill_fn!(A a);
impl_fill_fn!(A a, B b);
impl_fill_fn!(A a, B b, C c);
impl_fill_fn!(A a, B b, C c, D d);
impl_fill_fn!(A a, B b, C c, D d, E e);
impl_fill_fn!(A a, B b, C c, D d, E e, F f);

/// Generate every argument of `f` from its parameter types and call it.
pub fn fill_randomly<R, Args, Output, F>(rng: &mut R, f: F) -> Result<Output>
where
    R: Rng,
    F: FillFn<Args, Output>,
{
    f.call_filled(rng)
}
