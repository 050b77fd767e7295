use super::brep::Brep;
use super::types::Face;

/// Iterator over faces in stored order.
///
/// Walks indices `0, 1, 2, ...` and stops at the first index without a face.
pub struct FaceIter<'a> {
    brep: &'a Brep,
    index: usize,
}

impl<'a> FaceIter<'a> {
    pub fn new(brep: &'a Brep) -> Self {
        Self { brep, index: 0 }
    }
}

impl<'a> Iterator for FaceIter<'a> {
    type Item = (usize, &'a Face);

    fn next(&mut self) -> Option<(usize, &'a Face)> {
        let face = self.brep.face(self.index)?;
        let index = self.index;
        self.index += 1;
        Some((index, face))
    }
}

impl Brep {
    /// Iterate faces with their indices.
    pub fn face_iter(&self) -> FaceIter<'_> {
        FaceIter::new(self)
    }
}
