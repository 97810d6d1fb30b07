use crate::error::CalcError;
use crate::validate;

/// F = ma
pub fn newtons_second_law(mass: f64, acceleration: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::finite("acceleration", acceleration)?;
    validate::finite_result("force", mass * acceleration)
}

/// f = μN
pub fn friction_force(coefficient: f64, normal_force: f64) -> Result<f64, CalcError> {
    validate::non_negative("coefficient", coefficient)?;
    validate::non_negative("normal_force", normal_force)?;
    validate::finite_result("friction_force", coefficient * normal_force)
}

/// F = mv²/r
pub fn centripetal_force(mass: f64, velocity: f64, radius: f64) -> Result<f64, CalcError> {
    validate::positive("mass", mass)?;
    validate::finite("velocity", velocity)?;
    validate::positive("radius", radius)?;
    validate::finite_result("centripetal_force", mass * velocity * velocity / radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_forces() {
        assert_eq!(newtons_second_law(10.0, 9.8), Ok(98.0));
        assert_eq!(friction_force(0.5, 100.0), Ok(50.0));
        assert_eq!(centripetal_force(2.0, 3.0, 1.5), Ok(12.0));
    }

    #[test]
    fn rejects_bad_domains() {
        assert_eq!(newtons_second_law(0.0, 1.0).unwrap_err().parameter(), Some("mass"));
        assert!(friction_force(-0.1, 1.0).is_err());
        assert_eq!(centripetal_force(1.0, 1.0, 0.0).unwrap_err().parameter(), Some("radius"));
    }
}
