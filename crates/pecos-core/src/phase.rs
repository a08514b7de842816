use num_complex::Complex64 as Complex;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
#[derive(Default)]
pub enum Phase {
    #[default]
    PlusOne = 0b00,
    MinusOne = 0b01,
    PlusI = 0b10,
    MinusI = 0b11,
}

impl Phase {
    #[must_use]
    pub fn multiply(self, other: Phase) -> Phase {
        let lhs = self as u8;
        let rhs = other as u8;

        // XOR signs and adjust for imaginary overlap
        let real = (lhs ^ rhs) & 0b01 ^ ((lhs & rhs) >> 1 & 0b01);

        // XOR imaginary parts
        let imaginary = (lhs ^ rhs) & 0b10;

        let result = real | imaginary;

        // Cast back to Phase
        unsafe { std::mem::transmute(result) }
    }

    #[must_use]
    pub fn conjugate(self) -> Self {
        use Phase::{MinusI, MinusOne, PlusI, PlusOne};
        match self {
            PlusOne | MinusOne => self, // Real phases are self-conjugate
            PlusI => MinusI,
            MinusI => PlusI,
        }
    }

    #[must_use]
    pub fn to_complex(self) -> num_complex::Complex<f64> {
        use Phase::{MinusI, MinusOne, PlusI, PlusOne};
        match self {
            PlusOne => Complex::new(1.0, 0.0),
            MinusOne => Complex::new(-1.0, 0.0),
            PlusI => Complex::new(0.0, 1.0),
            MinusI => Complex::new(0.0, -1.0),
        }
    }
}

// pub fn multiply(self, other: Phase) -> Phase {
//     // Precomputed multiplication table
//     const MULT_TABLE: [[Phase; 4]; 4] = [
//         [Phase::PlusOne, Phase::MinusOne, Phase::PlusI, Phase::MinusI], // PlusOne
//         [Phase::MinusOne, Phase::PlusOne, Phase::MinusI, Phase::PlusI], // MinusOne
//         [Phase::PlusI, Phase::MinusI, Phase::MinusOne, Phase::PlusOne], // PlusI
//         [Phase::MinusI, Phase::PlusI, Phase::PlusOne, Phase::MinusOne], // MinusI
//     ];
//
//     // Lookup result
//     unsafe { *MULT_TABLE.get_unchecked(self as usize).get_unchecked(other as usize) }
// }

// pub fn multiply(self, other: Self) -> Self {
//     use Phase::*;
//     match (self, other) {
//         (PlusOne, x) | (x, PlusOne) => x,
//         (MinusOne, MinusOne) => PlusOne,
//         (PlusI, MinusI) | (MinusI, PlusI) => PlusOne,
//         (PlusI, PlusI) | (MinusI, MinusI) => MinusOne,
//         (MinusOne, PlusI) | (PlusI, MinusOne) => MinusI,
//         (MinusOne, MinusI) | (MinusI, MinusOne) => PlusI,
//     }
// }

// pub fn multiply(self, other: Phase) -> Phase {
//     let lhs = self as u8;
//     let rhs = other as u8;
//
//     // XOR signs and adjust for imaginary overlap
//     let real = (lhs ^ rhs) & 0b01 ^ ((lhs & rhs) >> 1 & 0b01);
//
//     // XOR imaginary parts
//     let imaginary = (lhs ^ rhs) & 0b10;
//
//     let result = real | imaginary;
//
//     // Cast back to Phase
//     unsafe { std::mem::transmute(result) }
// }
