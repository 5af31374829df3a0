//! Recursive cartesian-product enumeration over value domains.
//!
//! The recursion descends one level per domain, branching over the
//! candidates at that level; each branch starts from an identical prefix,
//! so no state bleeds across siblings. Enumeration order is lexicographic
//! with the last domain varying fastest; the order only governs emission,
//! storage deduplicates.

use paramforge_core::ParamValue;
use smallvec::SmallVec;

/// Streams every combination of one value per domain into `visit`.
///
/// Zero domains produce no combinations (not one empty tuple); callers
/// special-case "no parameters". A domain of size zero contributes no
/// combinations either. The slice passed to `visit` holds one value per
/// domain, in domain order, and is only valid for the duration of the call.
///
/// # Examples
///
/// ```
/// use paramforge_core::ParamValue;
/// use paramforge_combine::for_each_combination;
///
/// let airbag = [ParamValue::from(0i64), ParamValue::from(1i64)];
/// let vehicle = [ParamValue::from("car"), ParamValue::from("motorbike")];
///
/// let mut count = 0;
/// for_each_combination(&[&airbag, &vehicle], |_combination| count += 1);
/// assert_eq!(count, 4);
/// ```
pub fn for_each_combination<F>(domains: &[&[ParamValue]], mut visit: F)
where
    F: FnMut(&[ParamValue]),
{
    if domains.is_empty() {
        return;
    }
    let mut stack: SmallVec<[ParamValue; 8]> = SmallVec::new();
    descend(domains, &mut stack, &mut visit);
}

fn descend<F>(remaining: &[&[ParamValue]], stack: &mut SmallVec<[ParamValue; 8]>, visit: &mut F)
where
    F: FnMut(&[ParamValue]),
{
    match remaining.split_first() {
        None => visit(stack),
        Some((domain, rest)) => {
            for value in *domain {
                stack.push(value.clone());
                descend(rest, stack, visit);
                stack.pop();
            }
        }
    }
}

/// Materializes the full cartesian product.
///
/// Length equals the product of the domain sizes. Prefer
/// [`for_each_combination`] in generation paths: the raw product grows
/// combinatorially and rarely needs to exist in memory at once.
pub fn cartesian_product(domains: &[&[ParamValue]]) -> Vec<Vec<ParamValue>> {
    let mut combinations = Vec::new();
    for_each_combination(domains, |combination| {
        combinations.push(combination.to_vec());
    });
    combinations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<ParamValue> {
        values.iter().map(|&v| ParamValue::from(v)).collect()
    }

    #[test]
    fn length_is_the_product_of_domain_sizes() {
        let a = ints(&[1, 2]);
        let b = ints(&[1, 2, 3]);
        let c = ints(&[1, 2]);

        let product = cartesian_product(&[&a, &b, &c]);
        assert_eq!(product.len(), 12);
    }

    #[test]
    fn zero_domains_yield_no_combinations() {
        assert!(cartesian_product(&[]).is_empty());
    }

    #[test]
    fn an_empty_domain_contributes_no_combinations() {
        let a = ints(&[1, 2]);
        let empty = ints(&[]);

        assert!(cartesian_product(&[&a, &empty]).is_empty());
        assert!(cartesian_product(&[&empty, &a]).is_empty());
    }

    #[test]
    fn last_domain_varies_fastest() {
        let a = ints(&[1, 2]);
        let b = ints(&[10, 20]);

        let product = cartesian_product(&[&a, &b]);
        assert_eq!(
            product,
            vec![
                ints(&[1, 10]),
                ints(&[1, 20]),
                ints(&[2, 10]),
                ints(&[2, 20]),
            ]
        );
    }

    #[test]
    fn single_domain_passes_through() {
        let a = ints(&[7, 8, 9]);
        let product = cartesian_product(&[&a]);
        assert_eq!(product, vec![ints(&[7]), ints(&[8]), ints(&[9])]);
    }
}
