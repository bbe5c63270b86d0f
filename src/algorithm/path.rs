use log::warn;

use crate::data_structures::ParentTable;
use crate::graph::NodeId;
use crate::{Error, Result};

/// Walks parent pointers back from `target` to `source` and returns the
/// path in source-to-target order
///
/// The walk takes at most as many steps as the table has entries. A target
/// with no parent, or a chain that loops or runs past that bound, is reported
/// as [`Error::UnreachableTarget`].
pub fn reconstruct_path<N: NodeId>(
    parents: &ParentTable<N>,
    source: &N,
    target: &N,
) -> Result<Vec<N>> {
    let unreachable = || Error::UnreachableTarget {
        from: format!("{:?}", source),
        to: format!("{:?}", target),
    };

    let max_steps = parents.len();
    let mut path = vec![target.clone()];
    let mut current = target;

    while current != source {
        if path.len() > max_steps {
            warn!(
                "Parent chain from {:?} exceeds {} steps without reaching {:?}",
                target, max_steps, source
            );
            return Err(unreachable());
        }

        match parents.parent_of(current) {
            Some(parent) => {
                path.push(parent.clone());
                current = parent;
            }
            None => return Err(unreachable()),
        }
    }

    path.reverse();
    Ok(path)
}
