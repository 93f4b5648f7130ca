#[cfg(feature = "serde-support")]
use serde::Serialize;

use crate::{
    GlCapabilitySet, GlCommandTable, GlLimitDescriptor, GlLimitShape, GlLimitValue, GlQueryError,
    GlQueryPrimitive, GlQueryResult, GlValueType, GlVersion, GL_LIMIT_DESCRIPTORS,
};
use fnv::FnvHashMap;

/// The outcome of collecting one limit. Both non-present states are normal: a limit can be
/// legitimately missing from a context.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub enum GlLimitEntry {
    Present(GlLimitValue),

    /// The context doesn't have the version or extension the limit needs. The driver was not
    /// asked.
    Unsupported,

    /// The driver was asked and reported an error
    QueryFailed(GlQueryError),
}

impl GlLimitEntry {
    pub fn is_present(&self) -> bool {
        matches!(self, GlLimitEntry::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    pub fn value(&self) -> Option<&GlLimitValue> {
        match self {
            GlLimitEntry::Present(value) => Some(value),
            _ => None,
        }
    }
}

/// Snapshot of every limit in a descriptor table for one context
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct GlLimitsRecord {
    version: GlVersion,
    entries: FnvHashMap<&'static str, GlLimitEntry>,
    #[cfg_attr(feature = "serde-support", serde(skip))]
    names_by_query_id: FnvHashMap<u32, &'static str>,
}

impl GlLimitsRecord {
    /// Version of the context the limits were collected from
    pub fn version(&self) -> GlVersion {
        self.version
    }

    pub fn get(
        &self,
        name: &str,
    ) -> Option<&GlLimitEntry> {
        self.entries.get(name)
    }

    pub fn value(
        &self,
        name: &str,
    ) -> Option<&GlLimitValue> {
        self.get(name).and_then(|entry| entry.value())
    }

    pub fn get_by_query_id(
        &self,
        query_id: u32,
    ) -> Option<&GlLimitEntry> {
        self.names_by_query_id
            .get(&query_id)
            .and_then(|name| self.entries.get(name))
    }

    /// True for limits that are unsupported or failed. Names that were never collected are not
    /// absent, they are unknown.
    pub fn is_absent(
        &self,
        name: &str,
    ) -> bool {
        self.get(name).map(|entry| entry.is_absent()).unwrap_or(false)
    }

    pub fn present_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_present()).count()
    }

    pub fn absent_count(&self) -> usize {
        self.entries.values().filter(|entry| entry.is_absent()).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &GlLimitEntry)> {
        self.entries.iter().map(|(name, entry)| (*name, entry))
    }

    /// An integer limit, widened to i64. Works for both glGetIntegerv and glGetInteger64v limits.
    pub fn integer(
        &self,
        name: &str,
    ) -> Option<i64> {
        self.value(name).and_then(|value| value.as_i64())
    }

    pub fn float(
        &self,
        name: &str,
    ) -> Option<f32> {
        self.value(name).and_then(|value| value.as_f32())
    }

    pub fn float_array(
        &self,
        name: &str,
    ) -> Option<&[f32]> {
        match self.value(name) {
            Some(GlLimitValue::FloatArray(values)) => Some(values),
            _ => None,
        }
    }

    pub fn integer_array(
        &self,
        name: &str,
    ) -> Option<&[i32]> {
        match self.value(name) {
            Some(GlLimitValue::IntegerArray(values)) => Some(values),
            _ => None,
        }
    }

    pub fn text(
        &self,
        name: &str,
    ) -> Option<&str> {
        self.value(name).and_then(|value| value.as_str())
    }
}

/// Queries every limit in a descriptor table, skipping the ones the context can't have. Never
/// fails: a limit the driver refuses is recorded as `QueryFailed` and collection continues.
pub struct GlLimitsCollector<'a> {
    descriptors: &'a [GlLimitDescriptor],
}

impl<'a> GlLimitsCollector<'a> {
    pub fn new(descriptors: &'a [GlLimitDescriptor]) -> Self {
        GlLimitsCollector { descriptors }
    }

    pub fn descriptors(&self) -> &'a [GlLimitDescriptor] {
        self.descriptors
    }

    #[profiling::function]
    pub fn collect(
        &self,
        capabilities: &GlCapabilitySet,
        query: &dyn GlQueryPrimitive,
    ) -> GlLimitsRecord {
        let mut record = GlLimitsRecord {
            version: capabilities.version(),
            entries: FnvHashMap::with_capacity_and_hasher(
                self.descriptors.len(),
                Default::default(),
            ),
            names_by_query_id: FnvHashMap::with_capacity_and_hasher(
                self.descriptors.len(),
                Default::default(),
            ),
        };

        for descriptor in self.descriptors {
            let entry = if !capabilities.supports(&descriptor.requirement) {
                log::trace!(
                    "Skipping GL limit {}, needs {}",
                    descriptor.name,
                    descriptor.requirement
                );
                GlLimitEntry::Unsupported
            } else {
                match query_limit(descriptor, query) {
                    Ok(value) => GlLimitEntry::Present(value),
                    Err(error) => {
                        log::debug!("Could not query GL limit {}: {}", descriptor.name, error);
                        GlLimitEntry::QueryFailed(error)
                    }
                }
            };

            record.entries.insert(descriptor.name, entry);
            record
                .names_by_query_id
                .insert(descriptor.query_id, descriptor.name);
        }

        log::debug!(
            "Collected {} GL limits, {} absent",
            record.present_count(),
            record.absent_count()
        );
        record
    }
}

impl<'a> GlLimitsCollector<'a> {
    /// Collect through `table`, gated by the capability set the table is bound to
    pub fn collect_from_table(
        &self,
        table: &GlCommandTable,
    ) -> GlLimitsRecord {
        self.collect(table.capabilities(), &table.query())
    }

    /// Like `collect_from_table`, but panics if `table` wasn't built for `capabilities`
    pub fn collect_from_table_for(
        &self,
        capabilities: &GlCapabilitySet,
        table: &GlCommandTable,
    ) -> GlLimitsRecord {
        table.verify_capabilities(capabilities);
        self.collect(capabilities, &table.query())
    }
}

impl GlLimitsCollector<'static> {
    /// A collector over `GL_LIMIT_DESCRIPTORS`
    pub fn standard() -> Self {
        GlLimitsCollector::new(GL_LIMIT_DESCRIPTORS)
    }
}

/// Collect `GL_LIMIT_DESCRIPTORS`
pub fn collect_standard(
    capabilities: &GlCapabilitySet,
    query: &dyn GlQueryPrimitive,
) -> GlLimitsRecord {
    GlLimitsCollector::standard().collect(capabilities, query)
}

fn query_limit(
    descriptor: &GlLimitDescriptor,
    query: &dyn GlQueryPrimitive,
) -> GlQueryResult<GlLimitValue> {
    let pname = descriptor.query_id;
    Ok(match descriptor.shape {
        GlLimitShape::Scalar(GlValueType::Integer) => {
            let mut value = [0];
            query.get_integerv(pname, &mut value)?;
            GlLimitValue::Integer(value[0])
        }
        GlLimitShape::Scalar(GlValueType::Integer64) => {
            let mut value = [0];
            query.get_integer64v(pname, &mut value)?;
            GlLimitValue::Integer64(value[0])
        }
        GlLimitShape::Scalar(GlValueType::Float) => {
            let mut value = [0.0];
            query.get_floatv(pname, &mut value)?;
            GlLimitValue::Float(value[0])
        }
        GlLimitShape::Scalar(GlValueType::Boolean) => {
            let mut value = [false];
            query.get_booleanv(pname, &mut value)?;
            GlLimitValue::Boolean(value[0])
        }
        GlLimitShape::FixedArray(value_type, len) => query_array(query, pname, value_type, len)?,
        GlLimitShape::Text => GlLimitValue::Text(query.get_string(pname)?.unwrap_or_default()),
    })
}

// Zero-length arrays are recorded empty without asking the driver
fn query_array(
    query: &dyn GlQueryPrimitive,
    pname: u32,
    value_type: GlValueType,
    len: usize,
) -> GlQueryResult<GlLimitValue> {
    Ok(match value_type {
        GlValueType::Integer => {
            let mut values = vec![0; len];
            if len > 0 {
                query.get_integerv(pname, &mut values)?;
            }
            GlLimitValue::IntegerArray(values)
        }
        GlValueType::Integer64 => {
            let mut values = vec![0; len];
            if len > 0 {
                query.get_integer64v(pname, &mut values)?;
            }
            GlLimitValue::Integer64Array(values)
        }
        GlValueType::Float => {
            let mut values = vec![0.0; len];
            if len > 0 {
                query.get_floatv(pname, &mut values)?;
            }
            GlLimitValue::FloatArray(values)
        }
        GlValueType::Boolean => {
            let mut values = vec![false; len];
            if len > 0 {
                query.get_booleanv(pname, &mut values)?;
            }
            GlLimitValue::BooleanArray(values)
        }
    })
}
