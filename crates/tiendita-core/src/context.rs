//! Store context formatter.
//!
//! Renders the catalog into the plain-text block embedded in the model
//! prompt: general info, then per-category product listings, then the
//! promotions active on the given date. Ordering follows catalog
//! declaration order throughout.

use chrono::NaiveDate;

use tiendita_types::catalog::StoreCatalog;

/// Render the catalog as prompt-ready plain text.
pub fn format_store_context(catalog: &StoreCatalog, today: NaiveDate) -> String {
    let mut lines = Vec::new();

    let info = &catalog.info_general;
    lines.push(format!("Tienda: {}", info.nombre));
    lines.push(format!("Horario: {}", info.horario));
    lines.push(format!("Métodos de pago: {}", info.metodos_pago.join(", ")));
    lines.push(format!(
        "Política de devoluciones: {}",
        info.politica_devoluciones
    ));

    for (categoria, info) in &catalog.categorias {
        lines.push(format!("\n{}:", categoria.to_uppercase()));
        for producto in &info.productos {
            lines.push(format!(
                "- {}: ${}\n  Tallas: {}\n  Colores: {}\n  {}",
                producto.nombre,
                producto.precio,
                producto.tallas.join(", "),
                producto.colores.join(", "),
                producto.descripcion,
            ));
        }
    }

    let activas: Vec<String> = catalog
        .promociones
        .iter()
        .filter(|p| p.is_active(today))
        .map(|p| format!("- {}", p.descripcion))
        .collect();

    if !activas.is_empty() {
        lines.push("\nPromociones actuales:".to_string());
        lines.extend(activas);
    }

    lines.join("\n")
}
