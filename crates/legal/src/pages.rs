use crate::content::{LegalPageContent, LegalSection};

pub(crate) static TERMS_AND_CONDITIONS: LegalPageContent = LegalPageContent {
    last_updated: "2025-01-15",
    version: "1.2",
    sections: &[
        LegalSection {
            id: "aceptacion",
            title: "Aceptación de los términos",
            content: "Al acceder a la tienda y realizar una compra aceptas estos términos y condiciones.",
        },
        LegalSection {
            id: "productos-y-precios",
            title: "Productos y precios",
            content: "Los precios incluyen impuestos y pueden cambiar sin previo aviso. \
                      Las imágenes de los productos son ilustrativas.",
        },
        LegalSection {
            id: "envios",
            title: "Envíos",
            content: "Los plazos de entrega son estimados y comienzan a contar desde la confirmación del pago.",
        },
        LegalSection {
            id: "garantia-y-devoluciones",
            title: "Garantía y devoluciones",
            content: "Todos los equipos cuentan con la garantía del fabricante. \
                      Dispones de 30 días naturales para solicitar una devolución.",
        },
        LegalSection {
            id: "contacto",
            title: "Contacto",
            content: "Para cualquier consulta sobre estos términos escríbenos a través del formulario de contacto.",
        },
    ],
};

pub(crate) static PRIVACY_POLICY: LegalPageContent = LegalPageContent {
    last_updated: "2025-01-15",
    version: "1.0",
    sections: &[
        LegalSection {
            id: "responsable",
            title: "Responsable del tratamiento",
            content: "La tienda es responsable del tratamiento de los datos personales que nos facilitas.",
        },
        LegalSection {
            id: "datos-recogidos",
            title: "Datos que recogemos",
            content: "Recogemos los datos necesarios para gestionar tu cuenta, tus pedidos y los envíos.",
        },
        LegalSection {
            id: "finalidad",
            title: "Finalidad",
            content: "Usamos tus datos para procesar pedidos, atender consultas y cumplir obligaciones legales.",
        },
        LegalSection {
            id: "derechos",
            title: "Tus derechos",
            content: "Puedes acceder, rectificar o suprimir tus datos en cualquier momento desde tu cuenta.",
        },
    ],
};
