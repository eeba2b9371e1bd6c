//! Modelo de especificaciones de vehículo
//!
//! Este módulo define la estructura que devuelve el extractor: una ficha
//! técnica plana con un único sub-objeto (`max_power`). Todos los campos son
//! opcionales porque el modelo de lenguaje marca como `null` lo que no puede
//! determinar; en la serialización los `None` se emiten como `null` explícito,
//! nunca se omiten (requisito del schema que se pasa al proveedor).

use serde::{Deserialize, Serialize};

/// Ficha técnica de un vehículo extraída de una descripción libre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpecification {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub version: Option<String>,
    pub year: Option<i32>,
    pub body_type: Option<BodyType>,
    pub doors: Option<i32>,
    pub status: Option<String>,
    /// Longitud en milímetros (mm)
    pub length: Option<i64>,
    pub seats: Option<i32>,
    /// Precio en euros (€)
    pub price: Option<f64>,
    pub technology: Option<Technology>,
    pub transmission: Option<String>,
    /// Consumo combinado en l/100km
    pub fuel_consumption: Option<f64>,
    pub fuel_type: Option<FuelType>,
    /// Autonomía eléctrica en km
    pub electric_range: Option<i64>,
    /// Capacidad de batería en kWh
    pub battery_capacity: Option<f64>,
    /// Consumo eléctrico combinado en kWh/100km
    pub electric_consumption: Option<f64>,
    /// Tiempo de carga en corriente alterna, en horas
    pub charging_time: Option<f64>,
    /// Fecha para distinguir duplicados, formato "MMM-YY" (p.ej. "Sep-24").
    /// Se transporta como texto opaco, este servicio no la parsea.
    pub duplicate_date: Option<String>,
    pub max_power: Option<MaxPower>,
    /// Aceleración 0-100 km/h en segundos
    pub acceleration: Option<f64>,
    /// Cilindrada en centímetros cúbicos (cc)
    pub displacement: Option<i64>,
    pub environmental_label: Option<String>,
    /// Emisiones de CO2 en g/km
    pub co2_emissions: Option<f64>,
    /// Capacidad del depósito en litros o kg según combustible
    pub tank_capacity: Option<f64>,
    /// Velocidad máxima en km/h
    pub max_speed: Option<f64>,
    /// Costes de mantenimiento en €/mes
    pub maintenance_costs: Option<f64>,
    /// Valoración EuroNCAP en estrellas
    pub euro_ncap_rating: Option<i32>,
    /// Páginas web de las que se extrajeron los datos
    pub sources: Option<String>,
}

/// Potencia máxima del vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxPower {
    /// Caballos de vapor (CV)
    pub cv: Option<i64>,
    /// Kilovatios (kW)
    pub kw: Option<i64>,
}

/// Tipos de carrocería (vocabulario cerrado del schema)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyType {
    #[serde(rename = "Turismo familiar")]
    TurismoFamiliar,
    Turismo,
    Todoterreno,
    #[serde(rename = "Vehículo comercial")]
    VehiculoComercial,
    Descapotable,
    #[serde(rename = "Pick Up")]
    PickUp,
    Monovolumen,
    #[serde(rename = "Coupé")]
    Coupe,
    #[serde(rename = "Monovolumen_parecido_a_vehículo_comercial")]
    MonovolumenComercial,
}

/// Tecnología de propulsión del vehículo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technology {
    #[serde(rename = "HEV")]
    Hev,
    #[serde(rename = "MHEV")]
    Mhev,
    #[serde(rename = "PHEV")]
    Phev,
    #[serde(rename = "EV")]
    Ev,
    #[serde(rename = "EREV")]
    Erev,
    Combustion,
}

/// Tipos de combustible (vocabulario cerrado del schema)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoleo,
    Gasolina,
    Electricidad,
    Etanol,
    #[serde(rename = "gas natural")]
    GasNatural,
    Glp,
    Hidrogeno,
}

impl VehicleSpecification {
    /// Ficha vacía: todos los campos a `null`
    pub fn empty() -> Self {
        Self {
            brand: None,
            model: None,
            version: None,
            year: None,
            body_type: None,
            doors: None,
            status: None,
            length: None,
            seats: None,
            price: None,
            technology: None,
            transmission: None,
            fuel_consumption: None,
            fuel_type: None,
            electric_range: None,
            battery_capacity: None,
            electric_consumption: None,
            charging_time: None,
            duplicate_date: None,
            max_power: None,
            acceleration: None,
            displacement: None,
            environmental_label: None,
            co2_emissions: None,
            tank_capacity: None,
            max_speed: None,
            maintenance_costs: None,
            euro_ncap_rating: None,
            sources: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn los_campos_desconocidos_se_serializan_como_null_explicito() {
        let spec = VehicleSpecification {
            brand: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some(2023),
            technology: Some(Technology::Hev),
            ..VehicleSpecification::empty()
        };

        let value = serde_json::to_value(&spec).unwrap();
        let object = value.as_object().unwrap();

        // Ningún campo se omite: los no determinables aparecen como null
        assert_eq!(object.len(), 29);
        assert_eq!(object["brand"], json!("Toyota"));
        assert_eq!(object["price"], json!(null));
        assert_eq!(object["max_power"], json!(null));
        assert_eq!(object["sources"], json!(null));
    }

    #[test]
    fn los_enums_usan_los_valores_del_vocabulario() {
        assert_eq!(
            serde_json::to_value(Technology::Mhev).unwrap(),
            json!("MHEV")
        );
        assert_eq!(
            serde_json::to_value(FuelType::GasNatural).unwrap(),
            json!("gas natural")
        );
        assert_eq!(
            serde_json::to_value(BodyType::Coupe).unwrap(),
            json!("Coupé")
        );
        assert_eq!(
            serde_json::to_value(BodyType::VehiculoComercial).unwrap(),
            json!("Vehículo comercial")
        );
    }

    #[test]
    fn un_valor_fuera_del_vocabulario_falla_al_deserializar() {
        let result: Result<FuelType, _> = serde_json::from_value(json!("kerosene"));
        assert!(result.is_err());
    }

    #[test]
    fn deserializa_una_ficha_completa_del_proveedor() {
        let payload = json!({
            "brand": "Renault",
            "model": "Clio",
            "version": "E-Tech",
            "year": 2024,
            "body_type": "Turismo",
            "doors": 5,
            "status": "for sale",
            "length": 4053,
            "seats": 5,
            "price": 23150.0,
            "technology": "HEV",
            "transmission": "automatic",
            "fuel_consumption": 4.2,
            "fuel_type": "gasolina",
            "electric_range": null,
            "battery_capacity": 1.2,
            "electric_consumption": null,
            "charging_time": null,
            "duplicate_date": "Sep-24",
            "max_power": { "cv": 145, "kw": 107 },
            "acceleration": 9.3,
            "displacement": 1598,
            "environmental_label": "ECO",
            "co2_emissions": 96.0,
            "tank_capacity": 39.0,
            "max_speed": 180.0,
            "maintenance_costs": null,
            "euro_ncap_rating": 5,
            "sources": "coches.net"
        });

        let spec: VehicleSpecification = serde_json::from_value(payload).unwrap();
        assert_eq!(spec.body_type, Some(BodyType::Turismo));
        assert_eq!(spec.fuel_type, Some(FuelType::Gasolina));
        assert_eq!(spec.max_power, Some(MaxPower { cv: Some(145), kw: Some(107) }));
        assert_eq!(spec.electric_range, None);
    }
}
