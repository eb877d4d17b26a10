//! Fixed catalogs: the predefined economic questions and the schools of thought.

use std::fmt;

pub const MAX_SCHOOLS: usize = 5;

pub const SCHOOLS: [&str; 15] = [
    "Escuela Austríaca de Economía",
    "Socialismo",
    "Keynesianismo",
    "Monetarismo",
    "Mercantilismo",
    "Marxismo",
    "Neoclasicismo",
    "Fisiocracia",
    "Economía del Desarrollo",
    "Economía Conductual",
    "Escuela de Chicago",
    "Institucionalismo",
    "Económica Feminista",
    "Poskeynesianismo",
    "Escuela de Fráncfort",
];

const QUESTIONS: [&str; 102] = [
    "¿Cómo se determinan los precios en un mercado libre?",
    "¿Cuál es el impacto del salario mínimo en el empleo?",
    "¿Qué efectos tiene la inflación en la economía?",
    "¿Cómo influyen los tipos de interés en la inversión?",
    "¿Es el déficit fiscal perjudicial para la economía?",
    "¿Cómo afectan los aranceles al comercio internacional?",
    "¿Qué papel juegan los bancos centrales en la estabilidad económica?",
    "¿La política fiscal expansionista es efectiva para combatir la recesión?",
    "¿Cuál es la relación entre la oferta monetaria y la inflación?",
    "¿Qué diferencias existen entre el capitalismo y el socialismo?",
    "¿Cómo funciona el concepto de la mano invisible de Adam Smith?",
    "¿Cuáles son las causas del desempleo estructural?",
    "¿Qué ventaja tiene el comercio internacional?",
    "¿Cómo afecta la globalización a las economías locales?",
    "¿Qué es la teoría del valor-trabajo?",
    "¿Cuáles son los problemas del mercado laboral contemporáneo?",
    "¿De qué manera impacta la educación en el crecimiento económico?",
    "¿Qué es la trampa de la liquidez en la teoría keynesiana?",
    "¿Puede el proteccionismo ser beneficioso?",
    "¿Qué son los ciclos económicos?",
    "¿Cómo se mide el producto interno bruto (PIB)?",
    "¿Qué es la estanflación y cómo se combate?",
    "¿Cómo se relacionan la oferta y demanda de dinero con la inflación?",
    "¿Cuál es el efecto de la deuda pública sobre la economía?",
    "¿Qué es la teoría de los juegos y cómo se aplica en la economía?",
    "¿Cómo afectan los impuestos al comportamiento de los consumidores?",
    "¿Qué es la elasticidad precio de la demanda?",
    "¿Qué implica la existencia de externalidades en el mercado?",
    "¿Cómo se determina el tipo de cambio en el mercado de divisas?",
    "¿Qué es la curva de Laffer?",
    "¿Qué es el análisis coste-beneficio?",
    "¿Qué papel juegan las instituciones en el desarrollo económico?",
    "¿Cómo se regula la competencia en los mercados?",
    "¿Qué es la economía del bienestar?",
    "¿Cuáles son las consecuencias de la intervención gubernamental en la economía?",
    "¿Qué es la eficiencia de Pareto?",
    "¿Qué es la teoría del capital humano?",
    "¿Qué es el coeficiente de Gini y qué mide?",
    "¿Cómo funciona el modelo de oferta y demanda agregada?",
    "¿Qué es la teoría económica neoclásica?",
    "¿Qué es el equilibrio general en la economía?",
    "¿Cómo afectan las políticas monetarias a la economía?",
    "¿Qué es la matriz insumo-producto?",
    "¿Qué es la paradoja del ahorro?",
    "¿Qué es la teoría de las expectativas racionales?",
    "¿Qué es el multiplicador keynesiano?",
    "¿Qué es un monopolio y cómo se regula?",
    "¿Qué es la teoría de la utilidad marginal?",
    "¿Qué es la teoría de la renta ricardiana?",
    "¿Qué es la teoría de la elección del consumidor?",
    "¿Qué es el equilibrio de Nash?",
    "¿Qué es la teoría del comercio internacional?",
    "¿Qué es la economía de la oferta?",
    "¿Qué son las economías de escala?",
    "¿Qué es la teoría de la agencia?",
    "¿Qué es la teoría del desarrollo endógeno?",
    "¿Qué es el superávit y el déficit comercial?",
    "¿Qué son los bienes públicos y cómo se financian?",
    "¿Qué es la economía conductual?",
    "¿Qué es la teoría del crecimiento económico?",
    "¿Qué es la tasa natural de desempleo?",
    "¿Qué son las políticas de estabilización?",
    "¿Qué es la teoría de la preferencia intertemporal?",
    "¿Qué es la regla de oro de la acumulación?",
    "¿Para qué sirve el modelo de Heckscher-Ohlin?",
    "¿Qué es la política monetaria no convencional?",
    "¿Qué es la economía de la información?",
    "¿Cómo afectan los subsidios a la economía?",
    "¿Qué es la teoría del salario de eficiencia?",
    "¿Qué es el efecto multiplicador del gasto público?",
    "¿Qué es la política de ingresos?",
    "¿Qué es el mercado laboral dual?",
    "¿Qué es el modelo de crecimiento de Solow?",
    "¿Qué es la teoría de los mercados eficientes?",
    "¿Qué es el crowding out?",
    "¿Qué es la economía del comportamiento?",
    "¿Qué es la economía informal?",
    "¿Qué es el problema de agencia?",
    "¿Qué es la teoría del estado estacionario?",
    "¿Qué es la economía institucional?",
    "¿Cómo afectan las expectativas en los mercados financieros?",
    "¿Qué es el ciclo económico real?",
    "¿Qué es el mercado de capitales?",
    "¿Qué es la teoría cuantitativa del dinero?",
    "¿Qué es la inflación por demanda?",
    "¿Qué es la inflación por costos?",
    "¿Qué es la política arancelaria?",
    "¿Qué es la paridad del poder adquisitivo?",
    "¿Qué es la solvencia fiscal?",
    "¿Qué son los bienes de lujo?",
    "¿Qué son los bienes inferiores?",
    "¿Qué son los bienes sustitutos?",
    "¿Qué es la curva de demanda?",
    "¿Qué es la oferta agregada?",
    "¿Qué es el producto potencial?",
    "¿Qué es el modelo IS-LM?",
    "¿Qué es la política de oferta?",
    "¿Qué es el balance presupuestario?",
    "¿Qué son los bienes transables?",
    "¿Qué es la economía política?",
    "¿Qué es la economía experimental?",
    "¿Qué es la teoría de los contratos?",
];

/// The predefined questions in display order (sorted by code point).
pub fn questions() -> Vec<&'static str> {
    let mut sorted = QUESTIONS.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Look up a predefined question by its 1-based position in [`questions`].
pub fn question_at(position: usize) -> Option<&'static str> {
    position
        .checked_sub(1)
        .and_then(|i| questions().get(i).copied())
}

/// A school of economic thought from the fixed catalog.
///
/// Only constructible through [`School::parse`], so every value carries the
/// canonical spelling from [`SCHOOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct School(&'static str);

impl School {
    /// Resolve a user-supplied name to its canonical school, ignoring case and
    /// surrounding whitespace.
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = name.trim().to_lowercase();
        SCHOOLS
            .into_iter()
            .find(|s| s.to_lowercase() == wanted)
            .map(School)
    }

    pub fn all() -> impl Iterator<Item = School> {
        SCHOOLS.into_iter().map(School)
    }

    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for School {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
