/// Classification produced by the trial-division primality test.
///
/// Primality is only defined for integers of 2 or more; smaller inputs are
/// reported as [`Primality::Undefined`] rather than being shoehorned into
/// one of the other two answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primality {
    /// The number is prime.
    Prime,
    /// The number has a nontrivial divisor.
    Composite,
    /// The number is below 2, where primality is not defined.
    Undefined,
}

impl Primality {
    /// Returns `true` if this is [`Primality::Prime`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use duo_hash::primes::primality;
    ///
    /// assert!(primality(53).is_prime());
    /// assert!(!primality(54).is_prime());
    /// assert!(!primality(1).is_prime());
    /// ```
    #[inline]
    pub fn is_prime(self) -> bool {
        matches!(self, Primality::Prime)
    }
}

/// Classifies `x` by trial division.
///
/// After the small cases (inputs below 2 are [`Primality::Undefined`], 2 and
/// 3 are prime, larger even numbers are composite), candidate divisors are
/// the odd integers from 3 through the integer square root of `x`. The first
/// divisor found decides [`Primality::Composite`]; if none divides `x`, the
/// number is [`Primality::Prime`].
///
/// # Examples
///
/// ```rust
/// use duo_hash::primes::Primality;
/// use duo_hash::primes::primality;
///
/// assert_eq!(primality(0), Primality::Undefined);
/// assert_eq!(primality(2), Primality::Prime);
/// assert_eq!(primality(49), Primality::Composite);
/// assert_eq!(primality(101), Primality::Prime);
/// ```
pub fn primality(x: usize) -> Primality {
    if x < 2 {
        return Primality::Undefined;
    }
    if x < 4 {
        return Primality::Prime;
    }
    if x % 2 == 0 {
        return Primality::Composite;
    }

    if (3..=x.isqrt()).step_by(2).any(|divisor| x % divisor == 0) {
        Primality::Composite
    } else {
        Primality::Prime
    }
}

/// Returns the smallest prime greater than or equal to `x`.
///
/// The search simply increments until [`primality`] reports a prime, so
/// inputs below 2 yield 2.
///
/// # Examples
///
/// ```rust
/// use duo_hash::primes::next_prime;
///
/// assert_eq!(next_prime(50), 53);
/// assert_eq!(next_prime(53), 53);
/// assert_eq!(next_prime(100), 101);
/// assert_eq!(next_prime(0), 2);
/// ```
pub fn next_prime(x: usize) -> usize {
    let mut candidate = x;
    while !primality(candidate).is_prime() {
        candidate += 1;
    }
    candidate
}
