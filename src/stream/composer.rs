//! Stream Composer
//!
//! Concatenates pure concept blocks and the transition zones between them.

use super::layout::StreamLayout;
use super::transition::TransitionZone;
use super::Stream;
use crate::concept::RecordSource;
use crate::error::{GeneratorError, Result};
use rand::RngCore;
use tracing::debug;

/// Composes a stream from ordered record sources
#[derive(Debug)]
pub struct StreamComposer<'a, S> {
    sources: &'a [S],
    transition_lengths: &'a [usize],
}

impl<'a, S: RecordSource> StreamComposer<'a, S> {
    /// Create a composer; needs exactly one transition per boundary
    pub fn new(sources: &'a [S], transition_lengths: &'a [usize]) -> Result<Self> {
        if sources.is_empty() {
            return Err(GeneratorError::invalid("no concepts to compose"));
        }
        if transition_lengths.len() + 1 != sources.len() {
            return Err(GeneratorError::invalid(format!(
                "{} transitions given for {} concepts",
                transition_lengths.len(),
                sources.len()
            )));
        }
        Ok(Self {
            sources,
            transition_lengths,
        })
    }

    /// Layout the composed stream will have
    pub fn layout(&self) -> StreamLayout {
        let lengths: Vec<usize> = self.sources.iter().map(|s| s.length()).collect();
        StreamLayout::new(&lengths, self.transition_lengths)
    }

    /// Generate and assemble the stream.
    ///
    /// All pure blocks are drawn first, then each transition zone in
    /// boundary order; the output is then built by appending segments in
    /// layout order.
    pub fn compose(&self, rng: &mut dyn RngCore) -> Stream {
        let blocks: Vec<_> = self
            .sources
            .iter()
            .enumerate()
            .map(|(i, source)| {
                let block = source.generate(rng);
                debug!(concept = i, records = block.len(), "generated concept block");
                block
            })
            .collect();

        let zones: Vec<TransitionZone> = self
            .transition_lengths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let zone = TransitionZone::generate(
                    i,
                    width,
                    &self.sources[i],
                    &self.sources[i + 1],
                    rng,
                );
                if width > 0 {
                    debug!(boundary = i, records = zone.len(), "generated transition zone");
                }
                zone
            })
            .collect();

        let layout = self.layout();
        let total = layout.total_length();
        let mut records = Vec::with_capacity(total);
        let mut origins = Vec::with_capacity(total);

        let mut zones = zones.into_iter();
        for (i, block) in blocks.into_iter().enumerate() {
            origins.extend(std::iter::repeat(i).take(block.len()));
            records.extend(block);
            if let Some(zone) = zones.next() {
                origins.extend(zone.origins);
                records.extend(zone.records);
            }
        }

        Stream {
            records,
            origins,
            layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concept::{Concept, DigitTable, NUM_RELEVANT};
    use crate::stream::SegmentKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn concepts(lengths: &[usize], rng: &mut StdRng) -> Vec<Concept> {
        lengths
            .iter()
            .enumerate()
            .map(|(i, &len)| Concept::drifted(len, 0, i, rng).unwrap())
            .collect()
    }

    #[test]
    fn test_rejects_mismatched_transitions() {
        let mut rng = StdRng::seed_from_u64(0);
        let sources = concepts(&[10, 10, 10], &mut rng);
        assert!(StreamComposer::new(&sources, &[5]).is_err());
        assert!(StreamComposer::new(&sources, &[5, 5, 5]).is_err());
        assert!(StreamComposer::<Concept>::new(&[], &[]).is_err());
    }

    #[test]
    fn test_length_without_transitions() {
        let mut rng = StdRng::seed_from_u64(1);
        let sources = concepts(&[100, 100], &mut rng);
        let stream = StreamComposer::new(&sources, &[0]).unwrap().compose(&mut rng);

        assert_eq!(stream.len(), 200);
        assert_eq!(stream.num_attributes(), NUM_RELEVANT);
        assert!(stream.origins()[..100].iter().all(|&o| o == 0));
        assert!(stream.origins()[100..].iter().all(|&o| o == 1));
    }

    #[test]
    fn test_length_with_transitions() {
        let mut rng = StdRng::seed_from_u64(2);
        let sources = concepts(&[30, 40, 50, 60], &mut rng);
        let transitions = [5, 0, 15];
        let stream = StreamComposer::new(&sources, &transitions)
            .unwrap()
            .compose(&mut rng);

        assert_eq!(stream.len(), 180 + 20);
        assert_eq!(stream.origins().len(), stream.len());
    }

    #[test]
    fn test_pure_blocks_keep_full_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let sources = concepts(&[20, 30, 40], &mut rng);
        let stream = StreamComposer::new(&sources, &[10, 10])
            .unwrap()
            .compose(&mut rng);

        for segment in stream.layout().segments() {
            let origins = &stream.origins()[segment.range()];
            match segment.kind {
                SegmentKind::Concept(i) => {
                    assert_eq!(segment.len(), sources[i].length());
                    assert!(origins.iter().all(|&o| o == i));
                }
                SegmentKind::Transition(i) => {
                    assert_eq!(segment.len(), 10);
                    assert!(origins.iter().all(|&o| o == i || o == i + 1));
                }
            }
        }
    }

    #[test]
    fn test_records_follow_their_concept_table() {
        let mut rng = StdRng::seed_from_u64(4);
        let sources = vec![
            Concept::new(DigitTable::base(0), 50),
            Concept::drifted(50, 0, 4, &mut rng).unwrap(),
        ];
        let stream = StreamComposer::new(&sources, &[20]).unwrap().compose(&mut rng);

        for (record, &origin) in stream.iter().zip(stream.origins()) {
            let expected = sources[origin].record_for(record.label as usize, &mut rng);
            assert_eq!(record.attributes, expected.attributes);
        }
    }
}
