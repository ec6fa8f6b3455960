//! Mocker session and the recursive value populator.
//!
//! A [`Mocker`] owns a seeded random source, the domain generator, the tag
//! and format dictionaries and the function registries. Each call walks the
//! target's [`Shape`] depth-first, resolving a directive at every level:
//!
//! ```text
//! mock(directive, &mut target)
//!        │
//!        ▼
//!   indirect()? ──yes──> populate(directive, inner)
//!        │
//!        ▼
//!   Resolver::resolve(directive, kind)
//!        │
//!        ▼
//!   mock(name) registered? ──yes──> set_any(gen_func())
//!        │
//!        ▼
//!   Shape::{Scalar, Aggregate, Sequence, FixedArray, Map, Unsupported}
//! ```

use crate::error::MockError;
use crate::generators::domain::{DomainGenerator, TemplateDomainGenerator};
use crate::generators::{generate_scalar, numeric};
use crate::random::RandomSource;
use crate::resolver::{Resolved, Resolver};
use mock_core::{
    AggregateTarget, Directive, Elements, FieldKind, MapTarget, Mockable, MockerConfig, Shape,
    EXCLUDE_MARKER,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Directive used for map keys when `key(...)` is absent.
pub const DEFAULT_KEY_DIRECTIVE: &str = "type(word)";

/// Custom generator producing a whole value for the target.
pub type GenFunc = Arc<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// Custom validator.
pub type ValidFunc = Arc<dyn Fn(&dyn Any) -> bool + Send + Sync>;

/// Generator functions by the name used in `mock(...)`.
pub type GenFuncs = HashMap<String, GenFunc>;

/// Validator functions by the name used in `valid(...)`.
pub type ValidFuncs = HashMap<String, ValidFunc>;

type Downcast = fn(&mut dyn Any) -> Option<&mut dyn Mockable>;

/// Wrap a typed closure as a [`GenFunc`].
///
/// ```rust
/// use mock_generator::{gen_func, GenFuncs, Mocker};
///
/// let mut mocker = Mocker::with_seed(42);
/// mocker.set_gen_funcs(GenFuncs::from([("answer".to_string(), gen_func(|| 42i64))]));
///
/// let mut n = 0i64;
/// mocker.mock("mock(answer)", &mut n).unwrap();
/// assert_eq!(n, 42);
/// ```
pub fn gen_func<T, F>(f: F) -> GenFunc
where
    T: Any + Send,
    F: Fn() -> T + Send + Sync + 'static,
{
    Arc::new(move || Box::new(f()) as Box<dyn Any + Send>)
}

/// Optional session settings for [`Mocker::new`].
#[derive(Default)]
pub struct MockOptions {
    pub gen_funcs: GenFuncs,
    pub valid_funcs: ValidFuncs,
    pub tags: HashMap<String, String>,
    pub formats: HashMap<String, String>,
    /// Defaults to [`TemplateDomainGenerator`]
    pub domain: Option<Box<dyn DomainGenerator>>,
}

/// Population session.
///
/// Calls take `&mut self`, so one session never runs two calls at once.
/// Settings changed between calls apply from the next call on.
pub struct Mocker {
    random: RandomSource,
    domain: Box<dyn DomainGenerator>,
    gen_funcs: GenFuncs,
    valid_funcs: ValidFuncs,
    tags: HashMap<String, String>,
    formats: HashMap<String, String>,
    targets: HashMap<TypeId, Downcast>,
    errors: Vec<MockError>,
}

impl Mocker {
    /// Create a new session.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the random source; equal seeds replay equal calls
    /// * `options` - Dictionaries, registries and domain generator
    pub fn new(seed: u64, options: MockOptions) -> Self {
        Self {
            random: RandomSource::new(seed),
            domain: options
                .domain
                .unwrap_or_else(|| Box::new(TemplateDomainGenerator)),
            gen_funcs: options.gen_funcs,
            valid_funcs: options.valid_funcs,
            tags: options.tags,
            formats: options.formats,
            targets: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Create a session with empty dictionaries and registries.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(seed, MockOptions::default())
    }

    /// Create a session from a loaded configuration.
    pub fn from_config(config: &MockerConfig) -> Self {
        Self::new(
            config.seed,
            MockOptions {
                tags: config.tags.clone(),
                formats: config.formats.clone(),
                ..MockOptions::default()
            },
        )
    }

    pub fn set_gen_funcs(&mut self, gen_funcs: GenFuncs) {
        self.gen_funcs = gen_funcs;
    }

    pub fn set_valid_funcs(&mut self, valid_funcs: ValidFuncs) {
        self.valid_funcs = valid_funcs;
    }

    pub fn set_tags(&mut self, tags: HashMap<String, String>) {
        self.tags = tags;
    }

    pub fn set_formats(&mut self, formats: HashMap<String, String>) {
        self.formats = formats;
    }

    pub fn set_domain_generator(&mut self, domain: impl DomainGenerator + 'static) {
        self.domain = Box::new(domain);
    }

    /// Register `T` as a target for [`Mocker::mock_dyn`].
    pub fn register<T: Mockable>(&mut self) {
        self.targets.insert(TypeId::of::<T>(), downcast::<T>);
    }

    /// Populate `target` according to `directive`.
    ///
    /// Population is best effort: failures are recorded and the walk goes on.
    /// Returns the most recent error of the call; [`Mocker::errors`] lists
    /// all of them.
    pub fn mock<T: Mockable>(&mut self, directive: &str, target: &mut T) -> Result<(), MockError> {
        debug!(
            directive,
            target = std::any::type_name::<T>(),
            "Mocking target"
        );
        self.errors.clear();
        self.populate(directive, target);
        self.finish()
    }

    /// Populate a type-erased target registered with [`Mocker::register`].
    pub fn mock_dyn(&mut self, directive: &str, target: &mut dyn Any) -> Result<(), MockError> {
        self.errors.clear();
        let type_id = Any::type_id(&*target);
        debug!(directive, ?type_id, "Mocking dynamic target");

        let Some(target) = self
            .targets
            .get(&type_id)
            .copied()
            .and_then(|downcast| downcast(target))
        else {
            self.record(MockError::UnregisteredTarget(type_id));
            return self.finish();
        };
        self.populate(directive, target);
        self.finish()
    }

    /// Validate `target` against `directive`. Always `Ok(true)`.
    pub fn valid<T: Mockable>(&self, _directive: &str, _target: &T) -> Result<bool, MockError> {
        Ok(true)
    }

    /// Every error recorded during the most recent call.
    pub fn errors(&self) -> &[MockError] {
        &self.errors
    }

    pub fn tags(&self) -> &HashMap<String, String> {
        &self.tags
    }

    pub fn formats(&self) -> &HashMap<String, String> {
        &self.formats
    }

    /// Registered validators. Validation itself is not implemented yet, so
    /// these are only stored.
    pub fn valid_funcs(&self) -> &ValidFuncs {
        &self.valid_funcs
    }

    fn finish(&self) -> Result<(), MockError> {
        match self.errors.last() {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn record(&mut self, err: MockError) {
        debug!(error = %err, "Recorded mock error");
        self.errors.push(err);
    }

    fn resolve(&mut self, text: &str, kind: FieldKind) -> Directive {
        let Resolved { directive, errors } =
            Resolver::new(&self.tags, &self.formats).resolve(text, kind);
        for err in errors {
            self.record(err.into());
        }
        directive
    }

    fn populate(&mut self, text: &str, target: &mut dyn Mockable) {
        if let Some(inner) = target.indirect() {
            self.populate(text, inner);
            return;
        }

        let kind = target.kind();
        let directive = self.resolve(text, kind);
        if self.apply_gen_func(&directive, target) {
            return;
        }

        match target.shape() {
            Shape::Scalar(scalar) => {
                if let Some(value) =
                    generate_scalar(kind, &directive, &mut self.random, &*self.domain)
                {
                    scalar.store(value);
                }
            }
            Shape::Aggregate(aggregate) => self.populate_aggregate(aggregate),
            Shape::Sequence(sequence) => {
                let len = self.collection_len(&directive);
                sequence.reset(len);
                self.populate_elements(directive.elem_text(), sequence);
            }
            Shape::FixedArray(array) => self.populate_elements(directive.elem_text(), array),
            Shape::Map(map) => self.populate_map(&directive, map),
            Shape::Unsupported => {}
        }
    }

    /// Returns `true` when a registered generator function owns the target.
    fn apply_gen_func(&mut self, directive: &Directive, target: &mut dyn Mockable) -> bool {
        let Some(name) = directive.gen_func.as_deref() else {
            return false;
        };
        let Some(func) = self.gen_funcs.get(name) else {
            return false;
        };

        if target.set_any(func()).is_err() {
            let expected = target.kind();
            warn!(gen_func = name, %expected, "Generator function returned a mismatched type");
            self.record(MockError::GenFuncType {
                name: name.to_string(),
                expected,
            });
        }
        true
    }

    fn populate_aggregate(&mut self, aggregate: &mut dyn AggregateTarget) {
        for index in 0..aggregate.member_count() {
            let Some(member) = aggregate.member(index) else {
                continue;
            };
            if member.directive == EXCLUDE_MARKER || !member.target.is_zero() {
                continue;
            }
            self.populate(member.directive, member.target);
        }
    }

    fn populate_elements<E: Elements + ?Sized>(&mut self, text: &str, elements: &mut E) {
        for index in 0..elements.len() {
            if let Some(element) = elements.element(index) {
                self.populate(text, element);
            }
        }
    }

    /// Fill a map with up to the sampled number of entries. Colliding keys
    /// overwrite, so the map may end up smaller.
    fn populate_map(&mut self, directive: &Directive, map: &mut dyn MapTarget) {
        let key_kind = map.key_kind();
        if key_kind != FieldKind::String {
            warn!(%key_kind, "Map keys of this type cannot be generated");
            self.record(MockError::UnsupportedMapKey(key_kind));
            return;
        }

        map.clear();
        let len = self.collection_len(directive);
        let key_text = directive.key.as_deref().unwrap_or(DEFAULT_KEY_DIRECTIVE);
        let elem_text = directive.elem_text();
        for _ in 0..len {
            let mut key = String::new();
            self.populate(key_text, &mut key);
            map.insert_with(key, &mut |value: &mut dyn Mockable| {
                self.populate(elem_text, value)
            });
        }
    }

    fn collection_len(&mut self, directive: &Directive) -> usize {
        usize::try_from(numeric::generate_int(&mut self.random, directive)).unwrap_or(0)
    }
}

fn downcast<T: Mockable>(target: &mut dyn Any) -> Option<&mut dyn Mockable> {
    target
        .downcast_mut::<T>()
        .map(|target| target as &mut dyn Mockable)
}
