//! Cross products of discovery inputs.
//!
//! Module discovery enumerates every (node-modules path, module name, file
//! glob) combination; an empty input set is an explicit failure, not an
//! empty-but-successful result.

use crate::error::{Error, Result};

/// Ordered triple of discovery inputs.
pub type Triple = [String; 3];

/// N-ary cross product. The result order enumerates the last set fastest,
/// and an empty input set collapses the whole product to nothing.
pub fn cross_product(data: &[Vec<String>]) -> Vec<Vec<String>> {
    data.iter().fold(vec![Vec::new()], |memo, next| {
        memo.iter()
            .flat_map(|prefix| {
                next.iter().map(move |item| {
                    let mut combined = prefix.clone();
                    combined.push(item.clone());
                    combined
                })
            })
            .collect()
    })
}

/// Cross product of exactly three sets, as ordered triples.
pub fn cross_product3(a: &[String], b: &[String], c: &[String]) -> Result<Vec<Triple>> {
    if a.is_empty() || b.is_empty() || c.is_empty() {
        return Err(Error::EmptyCrossProductInput);
    }

    let mut result = Vec::with_capacity(a.len() * b.len() * c.len());
    for x in a {
        for y in b {
            for z in c {
                result.push([x.clone(), y.clone(), z.clone()]);
            }
        }
    }
    Ok(result)
}
