//! Marching cubes lookup tables.
//!
//! Corner `c` of a cell sits at `CORNER_OFFSETS[c]` relative to the cell's
//! minimum grid point. Edge `e` joins corners `EDGE_CORNERS[e]`. A case index
//! has bit `c` set when corner `c` lies below the iso level; its triangles
//! are listed as edge triples with normals facing the low side.

/// Grid offsets of the eight cell corners.
pub(crate) const CORNER_OFFSETS: [[usize; 3]; 8] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// Corner pairs joined by each of the twelve cell edges.
pub(crate) const EDGE_CORNERS: [[usize; 2]; 12] = [
    [0, 1],
    [1, 2],
    [2, 3],
    [3, 0],
    [4, 5],
    [5, 6],
    [6, 7],
    [7, 4],
    [0, 4],
    [1, 5],
    [2, 6],
    [3, 7],
];

/// Triangles per case, as triples of edge indices.
#[rustfmt::skip]
pub(crate) const TRI_TABLE: [&[[usize; 3]]; 256] = [
    /* 0x00 */ &[],
    /* 0x01 */ &[[0, 8, 3]],
    /* 0x02 */ &[[0, 1, 9]],
    /* 0x03 */ &[[1, 8, 3], [9, 8, 1]],
    /* 0x04 */ &[[1, 2, 10]],
    /* 0x05 */ &[[0, 8, 3], [1, 2, 10]],
    /* 0x06 */ &[[9, 2, 10], [0, 2, 9]],
    /* 0x07 */ &[[2, 8, 3], [2, 10, 8], [10, 9, 8]],
    /* 0x08 */ &[[3, 11, 2]],
    /* 0x09 */ &[[0, 11, 2], [8, 11, 0]],
    /* 0x0A */ &[[1, 9, 0], [2, 3, 11]],
    /* 0x0B */ &[[1, 11, 2], [1, 9, 11], [9, 8, 11]],
    /* 0x0C */ &[[3, 10, 1], [11, 10, 3]],
    /* 0x0D */ &[[0, 10, 1], [0, 8, 10], [8, 11, 10]],
    /* 0x0E */ &[[3, 9, 0], [3, 11, 9], [11, 10, 9]],
    /* 0x0F */ &[[9, 8, 10], [10, 8, 11]],
    /* 0x10 */ &[[4, 7, 8]],
    /* 0x11 */ &[[4, 3, 0], [7, 3, 4]],
    /* 0x12 */ &[[0, 1, 9], [8, 4, 7]],
    /* 0x13 */ &[[4, 1, 9], [4, 7, 1], [7, 3, 1]],
    /* 0x14 */ &[[1, 2, 10], [8, 4, 7]],
    /* 0x15 */ &[[3, 4, 7], [3, 0, 4], [1, 2, 10]],
    /* 0x16 */ &[[9, 2, 10], [9, 0, 2], [8, 4, 7]],
    /* 0x17 */ &[[2, 10, 9], [2, 9, 7], [2, 7, 3], [7, 9, 4]],
    /* 0x18 */ &[[8, 4, 7], [3, 11, 2]],
    /* 0x19 */ &[[11, 4, 7], [11, 2, 4], [2, 0, 4]],
    /* 0x1A */ &[[9, 0, 1], [8, 4, 7], [2, 3, 11]],
    /* 0x1B */ &[[4, 7, 11], [9, 4, 11], [9, 11, 2], [9, 2, 1]],
    /* 0x1C */ &[[3, 10, 1], [3, 11, 10], [7, 8, 4]],
    /* 0x1D */ &[[1, 11, 10], [1, 4, 11], [1, 0, 4], [7, 11, 4]],
    /* 0x1E */ &[[4, 7, 8], [9, 0, 11], [9, 11, 10], [11, 0, 3]],
    /* 0x1F */ &[[4, 7, 11], [4, 11, 9], [9, 11, 10]],
    /* 0x20 */ &[[9, 5, 4]],
    /* 0x21 */ &[[9, 5, 4], [0, 8, 3]],
    /* 0x22 */ &[[0, 5, 4], [1, 5, 0]],
    /* 0x23 */ &[[8, 5, 4], [8, 3, 5], [3, 1, 5]],
    /* 0x24 */ &[[1, 2, 10], [9, 5, 4]],
    /* 0x25 */ &[[3, 0, 8], [1, 2, 10], [4, 9, 5]],
    /* 0x26 */ &[[5, 2, 10], [5, 4, 2], [4, 0, 2]],
    /* 0x27 */ &[[2, 10, 5], [3, 2, 5], [3, 5, 4], [3, 4, 8]],
    /* 0x28 */ &[[9, 5, 4], [2, 3, 11]],
    /* 0x29 */ &[[0, 11, 2], [0, 8, 11], [4, 9, 5]],
    /* 0x2A */ &[[0, 5, 4], [0, 1, 5], [2, 3, 11]],
    /* 0x2B */ &[[2, 1, 5], [2, 5, 8], [2, 8, 11], [4, 8, 5]],
    /* 0x2C */ &[[10, 3, 11], [10, 1, 3], [9, 5, 4]],
    /* 0x2D */ &[[4, 9, 5], [0, 8, 1], [8, 10, 1], [8, 11, 10]],
    /* 0x2E */ &[[5, 4, 0], [5, 0, 11], [5, 11, 10], [11, 0, 3]],
    /* 0x2F */ &[[5, 4, 8], [5, 8, 10], [10, 8, 11]],
    /* 0x30 */ &[[9, 7, 8], [5, 7, 9]],
    /* 0x31 */ &[[9, 3, 0], [9, 5, 3], [5, 7, 3]],
    /* 0x32 */ &[[0, 7, 8], [0, 1, 7], [1, 5, 7]],
    /* 0x33 */ &[[1, 5, 3], [3, 5, 7]],
    /* 0x34 */ &[[9, 7, 8], [9, 5, 7], [10, 1, 2]],
    /* 0x35 */ &[[10, 1, 2], [9, 5, 0], [5, 3, 0], [5, 7, 3]],
    /* 0x36 */ &[[8, 0, 2], [8, 2, 5], [8, 5, 7], [10, 5, 2]],
    /* 0x37 */ &[[2, 10, 5], [2, 5, 3], [3, 5, 7]],
    /* 0x38 */ &[[7, 9, 5], [7, 8, 9], [3, 11, 2]],
    /* 0x39 */ &[[9, 5, 7], [9, 7, 2], [9, 2, 0], [2, 7, 11]],
    /* 0x3A */ &[[2, 3, 11], [0, 1, 8], [1, 7, 8], [1, 5, 7]],
    /* 0x3B */ &[[11, 2, 1], [11, 1, 7], [7, 1, 5]],
    /* 0x3C */ &[[9, 5, 8], [8, 5, 7], [10, 1, 3], [10, 3, 11]],
    /* 0x3D */ &[[5, 7, 0], [5, 0, 9], [7, 11, 0], [1, 0, 10], [11, 10, 0]],
    /* 0x3E */ &[[11, 10, 0], [11, 0, 3], [10, 5, 0], [8, 0, 7], [5, 7, 0]],
    /* 0x3F */ &[[11, 10, 5], [7, 11, 5]],
    /* 0x40 */ &[[10, 6, 5]],
    /* 0x41 */ &[[0, 8, 3], [5, 10, 6]],
    /* 0x42 */ &[[9, 0, 1], [5, 10, 6]],
    /* 0x43 */ &[[1, 8, 3], [1, 9, 8], [5, 10, 6]],
    /* 0x44 */ &[[1, 6, 5], [2, 6, 1]],
    /* 0x45 */ &[[1, 6, 5], [1, 2, 6], [3, 0, 8]],
    /* 0x46 */ &[[9, 6, 5], [9, 0, 6], [0, 2, 6]],
    /* 0x47 */ &[[5, 9, 8], [5, 8, 2], [5, 2, 6], [3, 2, 8]],
    /* 0x48 */ &[[2, 3, 11], [10, 6, 5]],
    /* 0x49 */ &[[11, 0, 8], [11, 2, 0], [10, 6, 5]],
    /* 0x4A */ &[[0, 1, 9], [2, 3, 11], [5, 10, 6]],
    /* 0x4B */ &[[5, 10, 6], [1, 9, 2], [9, 11, 2], [9, 8, 11]],
    /* 0x4C */ &[[6, 3, 11], [6, 5, 3], [5, 1, 3]],
    /* 0x4D */ &[[0, 8, 11], [0, 11, 5], [0, 5, 1], [5, 11, 6]],
    /* 0x4E */ &[[3, 11, 6], [0, 3, 6], [0, 6, 5], [0, 5, 9]],
    /* 0x4F */ &[[6, 5, 9], [6, 9, 11], [11, 9, 8]],
    /* 0x50 */ &[[5, 10, 6], [4, 7, 8]],
    /* 0x51 */ &[[4, 3, 0], [4, 7, 3], [6, 5, 10]],
    /* 0x52 */ &[[1, 9, 0], [5, 10, 6], [8, 4, 7]],
    /* 0x53 */ &[[10, 6, 5], [1, 9, 7], [1, 7, 3], [7, 9, 4]],
    /* 0x54 */ &[[6, 1, 2], [6, 5, 1], [4, 7, 8]],
    /* 0x55 */ &[[1, 2, 5], [5, 2, 6], [3, 0, 4], [3, 4, 7]],
    /* 0x56 */ &[[8, 4, 7], [9, 0, 5], [0, 6, 5], [0, 2, 6]],
    /* 0x57 */ &[[7, 3, 9], [7, 9, 4], [3, 2, 9], [5, 9, 6], [2, 6, 9]],
    /* 0x58 */ &[[3, 11, 2], [7, 8, 4], [10, 6, 5]],
    /* 0x59 */ &[[5, 10, 6], [4, 7, 2], [4, 2, 0], [2, 7, 11]],
    /* 0x5A */ &[[0, 1, 9], [4, 7, 8], [2, 3, 11], [5, 10, 6]],
    /* 0x5B */ &[[9, 2, 1], [9, 11, 2], [9, 4, 11], [7, 11, 4], [5, 10, 6]],
    /* 0x5C */ &[[8, 4, 7], [3, 11, 5], [3, 5, 1], [5, 11, 6]],
    /* 0x5D */ &[[5, 1, 11], [5, 11, 6], [1, 0, 11], [7, 11, 4], [0, 4, 11]],
    /* 0x5E */ &[[0, 5, 9], [0, 6, 5], [0, 3, 6], [11, 6, 3], [8, 4, 7]],
    /* 0x5F */ &[[6, 5, 9], [6, 9, 11], [4, 7, 9], [7, 11, 9]],
    /* 0x60 */ &[[10, 4, 9], [6, 4, 10]],
    /* 0x61 */ &[[4, 10, 6], [4, 9, 10], [0, 8, 3]],
    /* 0x62 */ &[[10, 0, 1], [10, 6, 0], [6, 4, 0]],
    /* 0x63 */ &[[8, 3, 1], [8, 1, 6], [8, 6, 4], [6, 1, 10]],
    /* 0x64 */ &[[1, 4, 9], [1, 2, 4], [2, 6, 4]],
    /* 0x65 */ &[[3, 0, 8], [1, 2, 9], [2, 4, 9], [2, 6, 4]],
    /* 0x66 */ &[[0, 2, 4], [4, 2, 6]],
    /* 0x67 */ &[[8, 3, 2], [8, 2, 4], [4, 2, 6]],
    /* 0x68 */ &[[10, 4, 9], [10, 6, 4], [11, 2, 3]],
    /* 0x69 */ &[[0, 8, 2], [2, 8, 11], [4, 9, 10], [4, 10, 6]],
    /* 0x6A */ &[[3, 11, 2], [0, 1, 6], [0, 6, 4], [6, 1, 10]],
    /* 0x6B */ &[[6, 4, 1], [6, 1, 10], [4, 8, 1], [2, 1, 11], [8, 11, 1]],
    /* 0x6C */ &[[9, 6, 4], [9, 3, 6], [9, 1, 3], [11, 6, 3]],
    /* 0x6D */ &[[8, 11, 1], [8, 1, 0], [11, 6, 1], [9, 1, 4], [6, 4, 1]],
    /* 0x6E */ &[[3, 11, 6], [3, 6, 0], [0, 6, 4]],
    /* 0x6F */ &[[6, 4, 8], [11, 6, 8]],
    /* 0x70 */ &[[7, 10, 6], [7, 8, 10], [8, 9, 10]],
    /* 0x71 */ &[[0, 7, 3], [0, 10, 7], [0, 9, 10], [6, 7, 10]],
    /* 0x72 */ &[[10, 6, 7], [1, 10, 7], [1, 7, 8], [1, 8, 0]],
    /* 0x73 */ &[[10, 6, 7], [10, 7, 1], [1, 7, 3]],
    /* 0x74 */ &[[1, 2, 6], [1, 6, 8], [1, 8, 9], [8, 6, 7]],
    /* 0x75 */ &[[2, 6, 9], [2, 9, 1], [6, 7, 9], [0, 9, 3], [7, 3, 9]],
    /* 0x76 */ &[[7, 8, 0], [7, 0, 6], [6, 0, 2]],
    /* 0x77 */ &[[7, 3, 2], [6, 7, 2]],
    /* 0x78 */ &[[2, 3, 11], [10, 6, 8], [10, 8, 9], [8, 6, 7]],
    /* 0x79 */ &[[2, 0, 7], [2, 7, 11], [0, 9, 7], [6, 7, 10], [9, 10, 7]],
    /* 0x7A */ &[[1, 8, 0], [1, 7, 8], [1, 10, 7], [6, 7, 10], [2, 3, 11]],
    /* 0x7B */ &[[11, 2, 1], [11, 1, 7], [10, 6, 1], [6, 7, 1]],
    /* 0x7C */ &[[8, 9, 6], [8, 6, 7], [9, 1, 6], [11, 6, 3], [1, 3, 6]],
    /* 0x7D */ &[[0, 9, 1], [11, 6, 7]],
    /* 0x7E */ &[[7, 8, 0], [7, 0, 6], [3, 11, 0], [11, 6, 0]],
    /* 0x7F */ &[[7, 11, 6]],
    /* 0x80 */ &[[7, 6, 11]],
    /* 0x81 */ &[[3, 0, 8], [11, 7, 6]],
    /* 0x82 */ &[[0, 1, 9], [11, 7, 6]],
    /* 0x83 */ &[[8, 1, 9], [8, 3, 1], [11, 7, 6]],
    /* 0x84 */ &[[10, 1, 2], [6, 11, 7]],
    /* 0x85 */ &[[1, 2, 10], [3, 0, 8], [6, 11, 7]],
    /* 0x86 */ &[[2, 9, 0], [2, 10, 9], [6, 11, 7]],
    /* 0x87 */ &[[6, 11, 7], [2, 10, 3], [10, 8, 3], [10, 9, 8]],
    /* 0x88 */ &[[7, 2, 3], [6, 2, 7]],
    /* 0x89 */ &[[7, 0, 8], [7, 6, 0], [6, 2, 0]],
    /* 0x8A */ &[[2, 7, 6], [2, 3, 7], [0, 1, 9]],
    /* 0x8B */ &[[1, 6, 2], [1, 8, 6], [1, 9, 8], [8, 7, 6]],
    /* 0x8C */ &[[10, 7, 6], [10, 1, 7], [1, 3, 7]],
    /* 0x8D */ &[[10, 7, 6], [1, 7, 10], [1, 8, 7], [1, 0, 8]],
    /* 0x8E */ &[[0, 3, 7], [0, 7, 10], [0, 10, 9], [6, 10, 7]],
    /* 0x8F */ &[[7, 6, 10], [7, 10, 8], [8, 10, 9]],
    /* 0x90 */ &[[6, 8, 4], [11, 8, 6]],
    /* 0x91 */ &[[3, 6, 11], [3, 0, 6], [0, 4, 6]],
    /* 0x92 */ &[[8, 6, 11], [8, 4, 6], [9, 0, 1]],
    /* 0x93 */ &[[9, 4, 6], [9, 6, 3], [9, 3, 1], [11, 3, 6]],
    /* 0x94 */ &[[6, 8, 4], [6, 11, 8], [2, 10, 1]],
    /* 0x95 */ &[[1, 2, 10], [3, 0, 11], [0, 6, 11], [0, 4, 6]],
    /* 0x96 */ &[[4, 11, 8], [4, 6, 11], [0, 2, 9], [2, 10, 9]],
    /* 0x97 */ &[[10, 9, 3], [10, 3, 2], [9, 4, 3], [11, 3, 6], [4, 6, 3]],
    /* 0x98 */ &[[8, 2, 3], [8, 4, 2], [4, 6, 2]],
    /* 0x99 */ &[[0, 4, 2], [4, 6, 2]],
    /* 0x9A */ &[[1, 9, 0], [2, 3, 4], [2, 4, 6], [4, 3, 8]],
    /* 0x9B */ &[[1, 9, 4], [1, 4, 2], [2, 4, 6]],
    /* 0x9C */ &[[8, 1, 3], [8, 6, 1], [8, 4, 6], [6, 10, 1]],
    /* 0x9D */ &[[10, 1, 0], [10, 0, 6], [6, 0, 4]],
    /* 0x9E */ &[[4, 6, 3], [4, 3, 8], [6, 10, 3], [0, 3, 9], [10, 9, 3]],
    /* 0x9F */ &[[10, 9, 4], [6, 10, 4]],
    /* 0xA0 */ &[[4, 9, 5], [7, 6, 11]],
    /* 0xA1 */ &[[0, 8, 3], [4, 9, 5], [11, 7, 6]],
    /* 0xA2 */ &[[5, 0, 1], [5, 4, 0], [7, 6, 11]],
    /* 0xA3 */ &[[11, 7, 6], [8, 3, 4], [3, 5, 4], [3, 1, 5]],
    /* 0xA4 */ &[[9, 5, 4], [10, 1, 2], [7, 6, 11]],
    /* 0xA5 */ &[[6, 11, 7], [1, 2, 10], [0, 8, 3], [4, 9, 5]],
    /* 0xA6 */ &[[7, 6, 11], [5, 4, 10], [4, 2, 10], [4, 0, 2]],
    /* 0xA7 */ &[[3, 4, 8], [3, 5, 4], [3, 2, 5], [10, 5, 2], [11, 7, 6]],
    /* 0xA8 */ &[[7, 2, 3], [7, 6, 2], [5, 4, 9]],
    /* 0xA9 */ &[[9, 5, 4], [0, 8, 6], [0, 6, 2], [6, 8, 7]],
    /* 0xAA */ &[[3, 6, 2], [3, 7, 6], [1, 5, 0], [5, 4, 0]],
    /* 0xAB */ &[[6, 2, 8], [6, 8, 7], [2, 1, 8], [4, 8, 5], [1, 5, 8]],
    /* 0xAC */ &[[9, 5, 4], [10, 1, 6], [1, 7, 6], [1, 3, 7]],
    /* 0xAD */ &[[1, 6, 10], [1, 7, 6], [1, 0, 7], [8, 7, 0], [9, 5, 4]],
    /* 0xAE */ &[[4, 0, 10], [4, 10, 5], [0, 3, 10], [6, 10, 7], [3, 7, 10]],
    /* 0xAF */ &[[7, 6, 10], [7, 10, 8], [5, 4, 10], [4, 8, 10]],
    /* 0xB0 */ &[[6, 9, 5], [6, 11, 9], [11, 8, 9]],
    /* 0xB1 */ &[[3, 6, 11], [0, 6, 3], [0, 5, 6], [0, 9, 5]],
    /* 0xB2 */ &[[0, 11, 8], [0, 5, 11], [0, 1, 5], [5, 6, 11]],
    /* 0xB3 */ &[[6, 11, 3], [6, 3, 5], [5, 3, 1]],
    /* 0xB4 */ &[[1, 2, 10], [9, 5, 11], [9, 11, 8], [11, 5, 6]],
    /* 0xB5 */ &[[0, 11, 3], [0, 6, 11], [0, 9, 6], [5, 6, 9], [1, 2, 10]],
    /* 0xB6 */ &[[11, 8, 5], [11, 5, 6], [8, 0, 5], [10, 5, 2], [0, 2, 5]],
    /* 0xB7 */ &[[6, 11, 3], [6, 3, 5], [2, 10, 3], [10, 5, 3]],
    /* 0xB8 */ &[[5, 8, 9], [5, 2, 8], [5, 6, 2], [3, 8, 2]],
    /* 0xB9 */ &[[9, 5, 6], [9, 6, 0], [0, 6, 2]],
    /* 0xBA */ &[[1, 5, 8], [1, 8, 0], [5, 6, 8], [3, 8, 2], [6, 2, 8]],
    /* 0xBB */ &[[1, 5, 6], [2, 1, 6]],
    /* 0xBC */ &[[1, 3, 6], [1, 6, 10], [3, 8, 6], [5, 6, 9], [8, 9, 6]],
    /* 0xBD */ &[[10, 1, 0], [10, 0, 6], [9, 5, 0], [5, 6, 0]],
    /* 0xBE */ &[[0, 3, 8], [5, 6, 10]],
    /* 0xBF */ &[[10, 5, 6]],
    /* 0xC0 */ &[[11, 5, 10], [7, 5, 11]],
    /* 0xC1 */ &[[11, 5, 10], [11, 7, 5], [8, 3, 0]],
    /* 0xC2 */ &[[5, 11, 7], [5, 10, 11], [1, 9, 0]],
    /* 0xC3 */ &[[10, 7, 5], [10, 11, 7], [9, 8, 1], [8, 3, 1]],
    /* 0xC4 */ &[[11, 1, 2], [11, 7, 1], [7, 5, 1]],
    /* 0xC5 */ &[[0, 8, 3], [1, 2, 7], [1, 7, 5], [7, 2, 11]],
    /* 0xC6 */ &[[9, 7, 5], [9, 2, 7], [9, 0, 2], [2, 11, 7]],
    /* 0xC7 */ &[[7, 5, 2], [7, 2, 11], [5, 9, 2], [3, 2, 8], [9, 8, 2]],
    /* 0xC8 */ &[[2, 5, 10], [2, 3, 5], [3, 7, 5]],
    /* 0xC9 */ &[[8, 2, 0], [8, 5, 2], [8, 7, 5], [10, 2, 5]],
    /* 0xCA */ &[[9, 0, 1], [5, 10, 3], [5, 3, 7], [3, 10, 2]],
    /* 0xCB */ &[[9, 8, 2], [9, 2, 1], [8, 7, 2], [10, 2, 5], [7, 5, 2]],
    /* 0xCC */ &[[1, 3, 5], [3, 7, 5]],
    /* 0xCD */ &[[0, 8, 7], [0, 7, 1], [1, 7, 5]],
    /* 0xCE */ &[[9, 0, 3], [9, 3, 5], [5, 3, 7]],
    /* 0xCF */ &[[9, 8, 7], [5, 9, 7]],
    /* 0xD0 */ &[[5, 8, 4], [5, 10, 8], [10, 11, 8]],
    /* 0xD1 */ &[[5, 0, 4], [5, 11, 0], [5, 10, 11], [11, 3, 0]],
    /* 0xD2 */ &[[0, 1, 9], [8, 4, 10], [8, 10, 11], [10, 4, 5]],
    /* 0xD3 */ &[[10, 11, 4], [10, 4, 5], [11, 3, 4], [9, 4, 1], [3, 1, 4]],
    /* 0xD4 */ &[[2, 5, 1], [2, 8, 5], [2, 11, 8], [4, 5, 8]],
    /* 0xD5 */ &[[0, 4, 11], [0, 11, 3], [4, 5, 11], [2, 11, 1], [5, 1, 11]],
    /* 0xD6 */ &[[0, 2, 5], [0, 5, 9], [2, 11, 5], [4, 5, 8], [11, 8, 5]],
    /* 0xD7 */ &[[9, 4, 5], [2, 11, 3]],
    /* 0xD8 */ &[[2, 5, 10], [3, 5, 2], [3, 4, 5], [3, 8, 4]],
    /* 0xD9 */ &[[5, 10, 2], [5, 2, 4], [4, 2, 0]],
    /* 0xDA */ &[[3, 10, 2], [3, 5, 10], [3, 8, 5], [4, 5, 8], [0, 1, 9]],
    /* 0xDB */ &[[5, 10, 2], [5, 2, 4], [1, 9, 2], [9, 4, 2]],
    /* 0xDC */ &[[8, 4, 5], [8, 5, 3], [3, 5, 1]],
    /* 0xDD */ &[[0, 4, 5], [1, 0, 5]],
    /* 0xDE */ &[[8, 4, 5], [8, 5, 3], [9, 0, 5], [0, 3, 5]],
    /* 0xDF */ &[[9, 4, 5]],
    /* 0xE0 */ &[[4, 11, 7], [4, 9, 11], [9, 10, 11]],
    /* 0xE1 */ &[[0, 8, 3], [4, 9, 7], [9, 11, 7], [9, 10, 11]],
    /* 0xE2 */ &[[1, 10, 11], [1, 11, 4], [1, 4, 0], [7, 4, 11]],
    /* 0xE3 */ &[[3, 1, 4], [3, 4, 8], [1, 10, 4], [7, 4, 11], [10, 11, 4]],
    /* 0xE4 */ &[[4, 11, 7], [9, 11, 4], [9, 2, 11], [9, 1, 2]],
    /* 0xE5 */ &[[9, 7, 4], [9, 11, 7], [9, 1, 11], [2, 11, 1], [0, 8, 3]],
    /* 0xE6 */ &[[11, 7, 4], [11, 4, 2], [2, 4, 0]],
    /* 0xE7 */ &[[11, 7, 4], [11, 4, 2], [8, 3, 4], [3, 2, 4]],
    /* 0xE8 */ &[[2, 9, 10], [2, 7, 9], [2, 3, 7], [7, 4, 9]],
    /* 0xE9 */ &[[9, 10, 7], [9, 7, 4], [10, 2, 7], [8, 7, 0], [2, 0, 7]],
    /* 0xEA */ &[[3, 7, 10], [3, 10, 2], [7, 4, 10], [1, 10, 0], [4, 0, 10]],
    /* 0xEB */ &[[1, 10, 2], [8, 7, 4]],
    /* 0xEC */ &[[4, 9, 1], [4, 1, 7], [7, 1, 3]],
    /* 0xED */ &[[4, 9, 1], [4, 1, 7], [0, 8, 1], [8, 7, 1]],
    /* 0xEE */ &[[4, 0, 3], [7, 4, 3]],
    /* 0xEF */ &[[4, 8, 7]],
    /* 0xF0 */ &[[9, 10, 8], [10, 11, 8]],
    /* 0xF1 */ &[[3, 0, 9], [3, 9, 11], [11, 9, 10]],
    /* 0xF2 */ &[[0, 1, 10], [0, 10, 8], [8, 10, 11]],
    /* 0xF3 */ &[[3, 1, 10], [11, 3, 10]],
    /* 0xF4 */ &[[1, 2, 11], [1, 11, 9], [9, 11, 8]],
    /* 0xF5 */ &[[3, 0, 9], [3, 9, 11], [1, 2, 9], [2, 11, 9]],
    /* 0xF6 */ &[[0, 2, 11], [8, 0, 11]],
    /* 0xF7 */ &[[3, 2, 11]],
    /* 0xF8 */ &[[2, 3, 8], [2, 8, 10], [10, 8, 9]],
    /* 0xF9 */ &[[9, 10, 2], [0, 9, 2]],
    /* 0xFA */ &[[2, 3, 8], [2, 8, 10], [0, 1, 8], [1, 10, 8]],
    /* 0xFB */ &[[1, 10, 2]],
    /* 0xFC */ &[[1, 3, 8], [9, 1, 8]],
    /* 0xFD */ &[[0, 9, 1]],
    /* 0xFE */ &[[0, 3, 8]],
    /* 0xFF */ &[],
];
