use crate::error::BoxError;

/// Which argument of [`Field::matches`] an extractor failed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The element being classified
    Subject,
    /// The element from the opposite list it is being compared against
    Candidate,
}

/// An extractor failure, before it is tied back to an element
#[derive(Debug)]
pub struct FieldFault {
    pub operand: Operand,
    pub source: BoxError,
}

/// A comparable field of `T`
///
/// Implementors extract the same field from two elements and report whether
/// the extracted values are equal. Key and value extractors of different
/// output types are stored side by side behind this trait.
pub trait Field<T> {
    fn matches(&self, subject: &T, candidate: &T) -> Result<bool, FieldFault>;
}

/// Adapts an infallible `Fn(&T) -> K` into a [`Field`]
pub struct Extractor<F>(pub F);

impl<T, K, F> Field<T> for Extractor<F>
where
    F: Fn(&T) -> K,
    K: PartialEq,
{
    fn matches(&self, subject: &T, candidate: &T) -> Result<bool, FieldFault> {
        Ok((self.0)(subject) == (self.0)(candidate))
    }
}

/// Adapts a fallible `Fn(&T) -> Result<K, E>` into a [`Field`]
///
/// The subject is extracted first, so a subject failure wins when both fail.
pub struct TryExtractor<F>(pub F);

impl<T, K, E, F> Field<T> for TryExtractor<F>
where
    F: Fn(&T) -> Result<K, E>,
    K: PartialEq,
    E: Into<BoxError>,
{
    fn matches(&self, subject: &T, candidate: &T) -> Result<bool, FieldFault> {
        let left = (self.0)(subject).map_err(|e| FieldFault {
            operand: Operand::Subject,
            source: e.into(),
        })?;
        let right = (self.0)(candidate).map_err(|e| FieldFault {
            operand: Operand::Candidate,
            source: e.into(),
        })?;
        Ok(left == right)
    }
}

/// Every field equal (true for an empty list)
pub(crate) fn all_equal<T>(
    fields: &[Box<dyn Field<T> + '_>],
    subject: &T,
    candidate: &T,
) -> Result<bool, FieldFault> {
    for field in fields {
        if !field.matches(subject, candidate)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// At least one field equal (false for an empty list)
pub(crate) fn any_equal<T>(
    fields: &[Box<dyn Field<T> + '_>],
    subject: &T,
    candidate: &T,
) -> Result<bool, FieldFault> {
    for field in fields {
        if field.matches(subject, candidate)? {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Every field different (true for an empty list)
pub(crate) fn all_differ<T>(
    fields: &[Box<dyn Field<T> + '_>],
    subject: &T,
    candidate: &T,
) -> Result<bool, FieldFault> {
    for field in fields {
        if field.matches(subject, candidate)? {
            return Ok(false);
        }
    }
    Ok(true)
}
