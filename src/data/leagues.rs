//! Built-in league table
//!
//! Ten leagues of five levels each, from "Explorador Terrestre" at 0 XP up
//! to "Leyenda Intergaláctica" at 150,000 XP.

use crate::progression::{League, Level, RankCatalog};

fn level(number: u32, title: &str, min_score: f64, perks: &[&str]) -> Level {
    Level {
        number,
        title: title.to_string(),
        min_score,
        perks: perks.iter().map(|p| p.to_string()).collect(),
    }
}

/// Default leagues, ordered by score
pub fn default_leagues() -> Vec<League> {
    vec![
        League {
            name: "Explorador Terrestre".to_string(),
            icon: "🌍".to_string(),
            description: "Comienza tu viaje desde la Tierra hacia las estrellas".to_string(),
            min_score: 0.0,
            max_score: 2000.0,
            levels: vec![
                level(1, "Recluta", 0.0, &["Acceso a estadísticas básicas", "Seguimiento de progreso"]),
                level(2, "Cadete", 400.0, &["Gráficos semanales", "Logros terrestres"]),
                level(3, "Aspirante", 800.0, &["Análisis de tendencias", "Multiplicador x1.2"]),
                level(4, "Oficial", 1200.0, &["Estadísticas avanzadas", "Multiplicador x1.5"]),
                level(5, "Comandante", 1600.0, &["Desbloquea rango espacial", "Multiplicador x2"]),
            ],
        },
        League {
            name: "Piloto Espacial".to_string(),
            icon: "🛸".to_string(),
            description: "Despega hacia la aventura más allá de la atmósfera".to_string(),
            min_score: 2000.0,
            max_score: 5000.0,
            levels: vec![
                level(1, "Piloto Novato", 2000.0, &["Análisis orbital", "Logros espaciales"]),
                level(2, "Piloto Experto", 2800.0, &["Multiplicador x2.5", "Medallas espaciales"]),
                level(3, "As Espacial", 3600.0, &["Estadísticas premium", "Multiplicador x3"]),
                level(4, "Piloto Elite", 4200.0, &["Contenido exclusivo", "Multiplicador x3.5"]),
                level(5, "Capitán", 4600.0, &["Desbloquea navegación lunar", "Multiplicador x4"]),
            ],
        },
        League {
            name: "Navegante Lunar".to_string(),
            icon: "🌙".to_string(),
            description: "Explora los misterios de nuestro satélite natural".to_string(),
            min_score: 5000.0,
            max_score: 10000.0,
            levels: vec![
                level(1, "Selenita", 5000.0, &["Análisis lunar", "Multiplicador x4.5"]),
                level(2, "Explorador Lunar", 6000.0, &["Logros lunares", "Multiplicador x5"]),
                level(3, "Pionero Lunar", 7000.0, &["Contenido VIP", "Multiplicador x5.5"]),
                level(4, "Guardián Lunar", 8000.0, &["Estadísticas únicas", "Multiplicador x6"]),
                level(5, "Señor Lunar", 9000.0, &["Desbloquea rango planetario", "Multiplicador x7"]),
            ],
        },
        League {
            name: "Pionero Planetario".to_string(),
            icon: "🪐".to_string(),
            description: "Aventúrate en la exploración del sistema solar".to_string(),
            min_score: 10000.0,
            max_score: 20000.0,
            levels: vec![
                level(1, "Explorador Solar", 10000.0, &["Análisis planetario", "Multiplicador x8"]),
                level(2, "Colonizador", 12500.0, &["Contenido exclusivo", "Multiplicador x9"]),
                level(3, "Terraformador", 15000.0, &["Logros planetarios", "Multiplicador x10"]),
                level(4, "Guardián Solar", 17500.0, &["Estadísticas solares", "Multiplicador x11"]),
                level(5, "Señor Planetario", 19000.0, &["Desbloquea rango estelar", "Multiplicador x12"]),
            ],
        },
        League {
            name: "Capitán Estelar".to_string(),
            icon: "⭐".to_string(),
            description: "Domina los secretos de las estrellas".to_string(),
            min_score: 20000.0,
            max_score: 35000.0,
            levels: vec![
                level(1, "Viajero Estelar", 20000.0, &["Análisis estelar", "Multiplicador x13"]),
                level(2, "Cartógrafo Estelar", 25000.0, &["Logros estelares", "Multiplicador x14"]),
                level(3, "Guardián Estelar", 30000.0, &["Contenido premium", "Multiplicador x15"]),
                level(4, "Señor Estelar", 32500.0, &["Estadísticas estelares", "Multiplicador x16"]),
                level(5, "Maestro Estelar", 34000.0, &["Desbloquea rango galáctico", "Multiplicador x17"]),
            ],
        },
        League {
            name: "Comandante Galáctico".to_string(),
            icon: "🌌".to_string(),
            description: "Lidera expediciones a través de la galaxia".to_string(),
            min_score: 35000.0,
            max_score: 50000.0,
            levels: vec![
                level(1, "Explorador Galáctico", 35000.0, &["Análisis galáctico", "Multiplicador x18"]),
                level(2, "Cartógrafo Galáctico", 40000.0, &["Logros galácticos", "Multiplicador x19"]),
                level(3, "Guardián Galáctico", 45000.0, &["Contenido legendario", "Multiplicador x20"]),
                level(4, "Señor Galáctico", 47500.0, &["Estadísticas galácticas", "Multiplicador x21"]),
                level(5, "Maestro Galáctico", 49000.0, &["Desbloquea rango cósmico", "Multiplicador x22"]),
            ],
        },
        League {
            name: "Guardián Cósmico".to_string(),
            icon: "☄️".to_string(),
            description: "Protege los secretos del cosmos".to_string(),
            min_score: 50000.0,
            max_score: 75000.0,
            levels: vec![
                level(1, "Protector Cósmico", 50000.0, &["Análisis cósmico", "Multiplicador x23"]),
                level(2, "Vigilante Cósmico", 60000.0, &["Logros cósmicos", "Multiplicador x24"]),
                level(3, "Custodio Cósmico", 70000.0, &["Contenido mítico", "Multiplicador x25"]),
                level(4, "Señor Cósmico", 72500.0, &["Estadísticas cósmicas", "Multiplicador x26"]),
                level(5, "Maestro Cósmico", 74000.0, &["Desbloquea rango astral", "Multiplicador x27"]),
            ],
        },
        League {
            name: "Almirante Astral".to_string(),
            icon: "🚀".to_string(),
            description: "Comanda las fuerzas del universo conocido".to_string(),
            min_score: 75000.0,
            max_score: 100000.0,
            levels: vec![
                level(1, "Comandante Astral", 75000.0, &["Análisis astral", "Multiplicador x28"]),
                level(2, "Estratega Astral", 85000.0, &["Logros astrales", "Multiplicador x29"]),
                level(3, "Guardián Astral", 95000.0, &["Contenido supremo", "Multiplicador x30"]),
                level(4, "Señor Astral", 97500.0, &["Estadísticas astrales", "Multiplicador x31"]),
                level(5, "Maestro Astral", 99000.0, &["Desbloquea rango universal", "Multiplicador x32"]),
            ],
        },
        League {
            name: "Maestro del Universo".to_string(),
            icon: "⚡".to_string(),
            description: "Alcanza la maestría suprema del cosmos".to_string(),
            min_score: 100000.0,
            max_score: 150000.0,
            levels: vec![
                level(1, "Sabio Universal", 100000.0, &["Análisis universal", "Multiplicador x33"]),
                level(2, "Guardián Universal", 120000.0, &["Logros universales", "Multiplicador x34"]),
                level(3, "Protector Universal", 140000.0, &["Contenido divino", "Multiplicador x35"]),
                level(4, "Señor Universal", 145000.0, &["Estadísticas universales", "Multiplicador x36"]),
                level(5, "Maestro Universal", 148000.0, &["Desbloquea rango legendario", "Multiplicador x37"]),
            ],
        },
        League {
            name: "Leyenda Intergaláctica".to_string(),
            icon: "✨".to_string(),
            description: "Trasciende los límites del universo conocido".to_string(),
            min_score: 150000.0,
            max_score: 200000.0,
            levels: vec![
                level(1, "Héroe Legendario", 150000.0, &["Análisis legendario", "Multiplicador x38"]),
                level(2, "Guardián Legendario", 165000.0, &["Logros legendarios", "Multiplicador x39"]),
                level(3, "Protector Legendario", 180000.0, &["Contenido infinito", "Multiplicador x40"]),
                level(4, "Señor Legendario", 190000.0, &["Estadísticas legendarias", "Multiplicador x41"]),
                level(5, "Maestro Legendario", 195000.0, &["Rango máximo alcanzado", "Multiplicador x42"]),
            ],
        },
    ]
}

/// Default rank catalog
pub fn default_catalog() -> RankCatalog {
    RankCatalog::new(default_leagues()).expect("built-in league table has levels in every league")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::Rank;

    #[test]
    fn test_default_leagues_are_contiguous() {
        let leagues = default_leagues();
        assert_eq!(leagues.len(), 10);
        for pair in leagues.windows(2) {
            assert_eq!(pair[0].max_score, pair[1].min_score, "gap after {}", pair[0].name);
        }
        for league in &leagues {
            assert_eq!(league.levels.len(), 5);
            assert_eq!(league.levels[0].min_score, league.min_score);
            assert!(league.levels.windows(2).all(|l| l[0].min_score < l[1].min_score));
        }
    }

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = default_catalog();
        assert_eq!(catalog.rank_for(0.0), Rank { league: 0, level: 0 });
        assert_eq!(catalog.rank_for(1999.0), Rank { league: 0, level: 4 });
        assert_eq!(catalog.rank_for(2000.0), Rank { league: 1, level: 0 });
        assert_eq!(catalog.rank_for(500_000.0), Rank { league: 9, level: 4 });
        assert_eq!(catalog.rank_progress(200.0), 50.0);
        assert_eq!(catalog.rank_progress(1700.0), 100.0);
    }
}
