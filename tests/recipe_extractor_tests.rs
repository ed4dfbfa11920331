use chef_chat_backend::services::recipe_extractor::extract;

const FULL_REPLY: &str = "¡Perfecto! Te sugiero un delicioso arroz con verduras salteadas 🍚✨

Ingredientes:
🍚 1 taza de arroz
🧅 1 cebolla pequeña
🥕 1 zanahoria
🥢 Salsa de soja al gusto

Pasos:
1. Cuece el arroz en agua con sal durante 15 minutos.
2. Saltea la cebolla y la zanahoria en una sartén.
3. Mezcla todo y añade la salsa de soja.

¡Buen provecho! 😋";

#[test]
fn full_recipe_is_extracted() {
    let draft = extract(FULL_REPLY).expect("recipe expected");

    assert_eq!(draft.title, "Delicioso arroz con verduras salteadas");
    assert_eq!(
        draft.ingredients,
        vec![
            "1 taza de arroz",
            "1 cebolla pequeña",
            "1 zanahoria",
            "Salsa de soja al gusto",
        ]
    );
    assert_eq!(draft.steps.len(), 3);
    assert_eq!(draft.steps[0], "Cuece el arroz en agua con sal durante 15 minutos.");
    assert!(draft.steps[2].starts_with("Mezcla todo"));
}

#[test]
fn markers_are_case_insensitive() {
    let text = "INGREDIENTES:\n- 2 huevos\n- Sal\nINSTRUCCIONES:\n1. Bate los huevos bien";
    let draft = extract(text).expect("recipe expected");
    assert_eq!(draft.ingredients, vec!["2 huevos", "Sal"]);
    assert_eq!(draft.steps, vec!["Bate los huevos bien"]);
    // A reply that opens with the list has no dish name to offer
    assert_eq!(draft.title, "Receta del Chef");
}

#[test]
fn markdown_headings_are_understood() {
    let text = "¡Claro! Te sugiero una paella 🥘

**Ingredientes:**
- 1 taza de arroz
- Azafrán
- 200 g de pollo

**Pasos:**
1. Sofríe el pollo en la paellera.
2. Añade el arroz y el azafrán.";
    let draft = extract(text).expect("recipe expected");
    assert_eq!(draft.title, "Paella");
    assert_eq!(draft.ingredients, vec!["1 taza de arroz", "Azafrán", "200 g de pollo"]);
    assert_eq!(
        draft.steps,
        vec!["Sofríe el pollo en la paellera.", "Añade el arroz y el azafrán."]
    );
}

#[test]
fn markdown_title_line_is_cleaned() {
    let text = "### Gazpacho andaluz\n\n## Ingredientes:\n- 1 kg de tomates\n## Pasos:\n1. Tritura todo junto";
    let draft = extract(text).expect("recipe expected");
    assert_eq!(draft.title, "Gazpacho andaluz");
    assert_eq!(draft.ingredients, vec!["1 kg de tomates"]);
}

#[test]
fn missing_steps_marker_yields_nothing() {
    let text = "Te sugiero una tortilla.\n\nIngredientes:\n- 4 huevos\n- 3 patatas";
    assert_eq!(extract(text), None);
}

#[test]
fn missing_ingredients_marker_yields_nothing() {
    let text = "Pasos:\n1. Calienta el horno a 180 grados";
    assert_eq!(extract(text), None);
}

#[test]
fn no_parseable_ingredients_yields_nothing() {
    let text = "Ingredientes:\n\n   \nPasos:\n1. Improvisa con lo que tengas";
    assert_eq!(extract(text), None);
}

#[test]
fn heading_line_is_not_an_ingredient() {
    let text = "Ingredientes:\ningredientes\n• 100 g de harina\nPasos:\n1. Tamiza la harina";
    let draft = extract(text).expect("recipe expected");
    assert_eq!(draft.ingredients, vec!["100 g de harina"]);
}

#[test]
fn plain_chat_yields_nothing() {
    assert_eq!(extract("¡Hola! ¿Qué te apetece cocinar hoy? 🍳"), None);
    assert_eq!(extract(""), None);
}
