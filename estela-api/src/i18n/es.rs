use super::*;

fn date_format(parts: &DateParts<'_>) -> String {
    format!(
        "{}{} {} de {}, {} — {}",
        parts.prefix, parts.weekday, parts.day, parts.month, parts.year, parts.time
    )
}

pub static ES: Translations = Translations {
    common: CommonStrings {
        cancel: "Cancelar",
        delete: "Eliminar",
        edit: "Editar",
        click_to_edit: "Click para editar...",
        add_prefix: "Agregar",
        loading: "Cargando registros...",
    },
    auth: AuthStrings {
        subtitle: "Diario de Proceso",
        app_name: "Estela",
        tagline: "Tu espacio para registrar, reflexionar y crecer",
        sign_in: "Iniciar sesion con Google",
        session_info: "Ejercicios de introspección",
    },
    nav: NavStrings {
        logout: "Salir",
        show_guide: "Ver guia del ejercicio",
        hide_guide: "Ocultar guia",
    },
    greeting: GreetingStrings {
        morning: "Buenos dias",
        afternoon: "Buenas tardes",
        evening: "Buenas noches",
    },
    exercises: ExerciseStrings {
        two_flags: TwoFlagsExerciseStrings {
            name: "Dos Banderas",
            icon: "🏴",
            guide: TwoFlagsGuideStrings {
                section1_label: "✨ Polvo de Estrellas:",
                section1_desc: "Serenidad, flujo, ser tu mismo.",
                section2_label: "🏴 La Madeja:",
                section2_desc: "Revoltijo, adaptacion forzada, incomodidad, atrapado.",
                instruction: "Registra momentos de ambas banderas cada dia.",
            },
            add_label: "Nuevo registro diario",
            empty_message: "Aun no hay registros. Crea tu primer registro diario.",
        },
        significant_bond: FreeformExerciseStrings {
            name: "Vinculo Significativo",
            icon: "🕊",
            description: "Escribe sobre una relacion significativa en tus años formativos, antes de que se acumulara la desilucion. Recupera el deseo original de conexion.",
            questions: "¿Cual es tu primer recuerdo de sentirte cerca y comprendido? ¿Que esperabas de esa conexion? ¿Cuando empezo a cambiar la dinamica? ¿Que patrones reconoces en tus relaciones posteriores?",
            add_label: "Nueva entrada",
            empty_message: "Cuando estes listo, crea tu primera entrada. Sin prisa.",
        },
        idealized_expectations: FreeformExerciseStrings {
            name: "Expectativas Idealizadas",
            icon: "🪞",
            description: "Examina las expectativas idealizadas que proyectas en tus relaciones. Si esta version ideal existiera como persona real, ¿seria alguien de tu circulo de confianza?",
            questions: "¿Que caracteristicas idealizas? ¿Cuales son las criticas implicitas en este ideal? Describelo como persona real. ¿Te atrae genuinamente? ¿Estas atraido a lo que representa o a quien realmente eres con esa persona?",
            add_label: "Nueva reflexion",
            empty_message: "Cuando estes listo, empieza tu primera reflexion.",
        },
    },
    time: TimeStrings {
        today: "Hoy",
        yesterday: "Ayer",
        days: [
            "Domingo",
            "Lunes",
            "Martes",
            "Miercoles",
            "Jueves",
            "Viernes",
            "Sabado",
        ],
        months: [
            "enero",
            "febrero",
            "marzo",
            "abril",
            "mayo",
            "junio",
            "julio",
            "agosto",
            "septiembre",
            "octubre",
            "noviembre",
            "diciembre",
        ],
        date_format,
    },
    two_flags: TwoFlagsStrings {
        new_record: "Nuevo registro diario",
        date_time_label: "Fecha/Hora:",
        section1_label: "Polvo de Estrellas",
        section1_placeholder: "Agrega momentos de serenidad y autenticidad...",
        section2_label: "La Madeja",
        section2_placeholder: "Agrega momentos de madeja/supervivencia...",
        learning_label: "¿Que aprendi hoy?",
        learning_placeholder: "Reflexion del dia...",
        delete_record: "Eliminar registro",
        delete_record_confirm: "¿Seguro que quieres eliminar este registro completo?",
        delete_item_confirm: "¿Seguro que quieres eliminar este elemento?",
        no_records: "Aun no hay registros. Crea tu primer registro diario.",
    },
    freeform: FreeformStrings {
        instruction_label: "Instrucciones:",
        questions_label: "Preguntas guia:",
        date_label: "Fecha:",
        title_placeholder: "Titulo de esta entrada...",
        content_placeholder: "Escribe aqui...",
        no_title: "Sin titulo",
        delete_entry: "Eliminar entrada",
        delete_entry_confirm: "¿Seguro que quieres eliminar esta entrada?",
    },
    theme: ThemeStrings {
        light: "Modo claro",
        dark: "Modo oscuro",
    },
    messages: MessageStrings {
        no_hurry: "Sin prisa, sin presion",
    },
    language: LanguageStrings {
        toggle: "Cambiar idioma",
    },
    marquee: MarqueeStrings {
        journal: "Diario de Proceso",
    },
};
