//! Built-in definition files written on first run.

/// Default `polygons.ini`
pub const DEFAULT_POLYGONS: &str = concat!(
    "name:rectangle\nx:0 0 1 1 0 0\ny:0 0 0 0.5 0.5 0\n\n",
    "name:line\nx:0 0 1.7 0\ny:0 0 0.3 0\n\n",
    "name:basis\nx:0 0 1 0 0.707 0\ny:0 0 0 0 0.707 0\n\n",
    "name:square\nx:0 0 1 1 0 0\ny:0 0 0 1 1 0\n\n",
    "name:dogegon\nx:1.3850 0.8711 1.0166 1.1751 1.7441 ",
    "2.0674 1.9413 1.8443 1.7861 1.7279 1.2818 1.1977 ",
    "1.1686 1.0490 1.0360 0.8679 0.8711\ny:1.4246 1.6176 ",
    "1.8261 1.6097 1.5595 1.4302 1.3378 1.3378 1.0422 ",
    "1.3326 1.3378 1.0106 1.3194 1.4012 1.5886 1.6176 ",
    "1.6176\n\n",
);

/// Default `matrices.ini`
pub const DEFAULT_MATRICES: &str = concat!(
    "name:default\n0 1 -1 0\n\n",
    "name:contracting rotation\n0.3 0.8 -0.8 0.3\n\n",
    "name:expanding rotation\n0.9 0.7 -0.7 0.9\n\n",
    "name:real eigenvalues\n0.2 -1.8 -1.2 0.8\n",
);

/// Polygon names in [`DEFAULT_POLYGONS`], in file order
pub const DEFAULT_POLYGON_NAMES: [&str; 5] = ["rectangle", "line", "basis", "square", "dogegon"];

/// Matrix names in [`DEFAULT_MATRICES`], in file order
pub const DEFAULT_MATRIX_NAMES: [&str; 4] = [
    "default",
    "contracting rotation",
    "expanding rotation",
    "real eigenvalues",
];
