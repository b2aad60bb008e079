use std::ops::ControlFlow;

use peak_core::Vertex;

use crate::search::Search;
use crate::sets::{insert_sorted, intersect};
use crate::Clique;

/// One suspended level of the search.
///
/// `candidates[cursor..]` are the candidates not tried yet at this level;
/// the clique-in-progress itself lives in a single vector shared by all
/// frames, one entry per frame.
struct Frame {
    candidates: Vec<usize>,
    excluded: Vec<usize>,
    cursor: usize,
}

impl<'s, 'g, V, F> Search<'s, 'g, V, F>
where
    V: Vertex,
    F: FnMut(Clique<V>) -> ControlFlow<()>,
{
    /// Same search as [`Search::expand`] rooted at `root`, driven by a heap
    /// allocated frame stack instead of native recursion.
    pub(crate) fn expand_with_stack(
        &mut self,
        root: usize,
        candidates: Vec<usize>,
        excluded: Vec<usize>,
    ) -> ControlFlow<()> {
        let mut clique = vec![root];
        self.enter(clique.len());
        if candidates.is_empty() && excluded.is_empty() {
            return self.emit(&clique);
        }

        let mut frames = vec![Frame {
            candidates,
            excluded,
            cursor: 0,
        }];
        while let Some(frame) = frames.last_mut() {
            if frame.cursor == frame.candidates.len() {
                frames.pop();
                clique.pop();
                continue;
            }
            self.check_cancelled()?;

            let vertex = frame.candidates[frame.cursor];
            let neighbors = self.adjacency.neighbors(vertex);
            let next_candidates = intersect(&frame.candidates[frame.cursor..], neighbors);
            let next_excluded = intersect(&frame.excluded, neighbors);
            frame.cursor += 1;
            insert_sorted(&mut frame.excluded, vertex);

            clique.push(vertex);
            self.enter(clique.len());
            if next_candidates.is_empty() {
                if next_excluded.is_empty() {
                    self.emit(&clique)?;
                }
                clique.pop();
            } else {
                frames.push(Frame {
                    candidates: next_candidates,
                    excluded: next_excluded,
                    cursor: 0,
                });
            }
        }
        ControlFlow::Continue(())
    }
}
