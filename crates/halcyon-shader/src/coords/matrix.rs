use glam::Mat4;

/// Element order of a flattened matrix.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatrixLayout {
    /// `out[row * n + col]`
    RowMajor,
    /// `out[col * n + row]`, the GL upload order (no transpose).
    ColumnMajor,
}

/// Reduces a 4×4 transform to the 3×3 normal transform.
///
/// The translation row and column are dropped; the upper-left rotation/scale
/// block is kept as-is and flattened in `layout` order.
pub fn normal_matrix(m: &Mat4, layout: MatrixLayout) -> [f32; 9] {
    let mut out = [0.0; 9];
    for col in 0..3 {
        let c = m.col(col);
        for row in 0..3 {
            let idx = match layout {
                MatrixLayout::RowMajor => row * 3 + col,
                MatrixLayout::ColumnMajor => col * 3 + row,
            };
            out[idx] = c[row];
        }
    }
    out
}
