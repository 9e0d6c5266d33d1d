//! Minimax polynomial coefficients shared by every backend.
//!
//! All backends evaluate the exact same polynomials so that results agree
//! across register families within floating point evaluation-order noise.
//! The approximations come from the minimax constructions in
//! "GPGPU Programming for Games and Science" (David H. Eberly).

/// 2π with more digits than f32 can hold, rounds to the nearest representable.
pub(crate) const TWO_PI: f32 = 6.283_185_307_179_586_476_925_286_766_559_005_768;

/// π, same rounding treatment as [`TWO_PI`].
pub(crate) const PI: f32 = 3.141_592_653_589_793_238_462_643_383_279_502_884;

/// π/2, used as the reflection pivot during range reduction.
pub(crate) const HALF_PI: f32 = 1.570_796_326_794_896_619_231_321_691_639_751_442;

/// 2^23, the smallest positive f32 magnitude with no fractional part.
pub(crate) const FRACTIONAL_LIMIT: f32 = 8_388_608.0;

// Sine: degree 11 odd polynomial in the reduced argument, evaluated in x².
// Constant term 1.0, result multiplied by x at the end.
pub(crate) const SIN_COEFF_1: f32 = -1.666_666_660_172_126_9e-1;
pub(crate) const SIN_COEFF_2: f32 = 8.333_330_318_352_594_2e-3;
pub(crate) const SIN_COEFF_3: f32 = -1.984_078_242_625_031_4e-4;
pub(crate) const SIN_COEFF_4: f32 = 2.752_155_777_052_678_3e-6;
pub(crate) const SIN_COEFF_5: f32 = -2.382_854_469_296_091_8e-8;

// Cosine: degree 10 even polynomial in the reduced argument, evaluated in x².
pub(crate) const COS_COEFF_1: f32 = -4.999_999_950_869_586_9e-1;
pub(crate) const COS_COEFF_2: f32 = 4.166_663_886_533_861_2e-2;
pub(crate) const COS_COEFF_3: f32 = -1.388_837_766_103_989_7e-3;
pub(crate) const COS_COEFF_4: f32 = 2.476_049_508_892_685_9e-5;
pub(crate) const COS_COEFF_5: f32 = -2.605_161_546_487_266_8e-7;

// Arcsine/arccosine: shared degree 7 polynomial in |v|, scaled by
// sqrt(1 - |v|). Constant term is π/2.
pub(crate) const ASIN_COEFF_0: f32 = 1.570_796_326_794_896_6;
pub(crate) const ASIN_COEFF_1: f32 = -2.145_996_007_692_982_9e-1;
pub(crate) const ASIN_COEFF_2: f32 = 8.898_694_657_334_616_0e-2;
pub(crate) const ASIN_COEFF_3: f32 = -5.020_784_305_284_564_7e-2;
pub(crate) const ASIN_COEFF_4: f32 = 3.096_159_497_761_163_9e-2;
pub(crate) const ASIN_COEFF_5: f32 = -1.716_203_118_439_807_4e-2;
pub(crate) const ASIN_COEFF_6: f32 = 6.707_230_467_668_523_5e-3;
pub(crate) const ASIN_COEFF_7: f32 = -1.269_061_433_958_995_6e-3;

// Arctangent: degree 13 odd polynomial over [-1, 1], evaluated in x².
// Constant term 1.0, result multiplied by x at the end.
pub(crate) const ATAN_COEFF_1: f32 = -3.332_499_857_920_217_0e-1;
pub(crate) const ATAN_COEFF_2: f32 = 1.985_656_350_571_716_2e-1;
pub(crate) const ATAN_COEFF_3: f32 = -1.337_465_732_545_126_7e-1;
pub(crate) const ATAN_COEFF_4: f32 = 8.167_588_285_994_043_0e-2;
pub(crate) const ATAN_COEFF_5: f32 = -3.505_968_083_641_164_4e-2;
pub(crate) const ATAN_COEFF_6: f32 = 7.212_885_363_344_412_3e-3;

/// π/2 expressed as the product of two factors whose bit patterns survive
/// f32 rounding; subtracting the degree 13 polynomial from this remaps
/// |v| > 1 inputs through atan(v) = π/2 - atan(1/v).
pub(crate) const ATAN_REMAP_OFFSET: f32 = 0.933_189_452 * 1.683_255_55;
