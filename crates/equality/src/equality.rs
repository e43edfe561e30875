/// A function shape comparing two values of the same type.
///
/// Useful for storing interchangeable strategies, e.g. `Box<EqualityFn<T>>`.
pub type EqualityFn<T> = dyn Fn(&T, &T) -> bool;

/// Decides whether two values of type `T` are considered equal.
///
/// Implementations are pure: they keep no state between calls and must
/// terminate for every well-typed input. Any closure or function
/// `Fn(&T, &T) -> bool` is an `Equality<T>`.
pub trait Equality<T: ?Sized> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

impl<T, F> Equality<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Builds an equality over `T` that compares values extracted by `accessor`.
///
/// The returned function evaluates `accessor(a)`, then `accessor(b)`, and
/// hands both to `equality`. Nothing is cached between calls. A panic in the
/// accessor or in `equality` unwinds to the caller.
///
/// ```
/// use equality::{equality_at, Equality};
///
/// struct User {
///     id: u32,
///     name: &'static str,
/// }
///
/// let by_id = equality_at(|u: &User| u.id, |a: &u32, b: &u32| a == b);
/// assert!(by_id.equal(&User { id: 1, name: "a" }, &User { id: 1, name: "b" }));
/// ```
pub fn equality_at<T, U, A, E>(accessor: A, equality: E) -> impl Fn(&T, &T) -> bool
where
    T: ?Sized,
    A: Fn(&T) -> U,
    E: Equality<U>,
{
    move |a: &T, b: &T| {
        let a = accessor(a);
        let b = accessor(b);
        equality.equal(&a, &b)
    }
}

/// Like [`equality_at`], for accessors that can fail.
///
/// The first accessor error is returned as-is; `accessor(b)` is not
/// evaluated when `accessor(a)` fails.
pub fn try_equality_at<T, U, X, A, E>(
    accessor: A,
    equality: E,
) -> impl Fn(&T, &T) -> Result<bool, X>
where
    T: ?Sized,
    A: Fn(&T) -> Result<U, X>,
    E: Equality<U>,
{
    move |a: &T, b: &T| {
        let a = accessor(a)?;
        let b = accessor(b)?;
        Ok(equality.equal(&a, &b))
    }
}
