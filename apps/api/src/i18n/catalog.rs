// Translation tables served to the client and used for server-side labels.
// Keys are `section.name`; every language carries the same key set.

pub(super) const EN: &[(&str, &str)] = &[
    ("common.title", "Emotional Wellness Assessment"),
    ("common.description", "Take a few minutes to understand your emotional well-being. This scientifically-informed assessment will provide personalized insights and recommendations for your mental health journey."),
    ("common.continue", "Continue"),
    ("common.retake", "Retake Assessment"),
    ("common.print", "Print Results"),
    ("common.skip", "Skip this step"),
    ("common.loading", "Loading..."),
    ("common.male", "Male"),
    ("common.female", "Female"),
    ("common.startAssessment", "Start Assessment"),
    ("common.comprehensiveAnalysis", "Comprehensive Analysis"),
    ("common.comprehensiveAnalysisDesc", "Evaluates anxiety, depression, trauma, stress, and mood indicators"),
    ("common.personalizedResults", "Personalized Results"),
    ("common.personalizedResultsDesc", "Receive tailored recommendations based on your responses"),
    ("common.actionableInsights", "Actionable Insights"),
    ("common.actionableInsightsDesc", "Get practical next steps to support your mental wellness"),
    ("common.whatToExpect", "What to Expect"),
    ("common.assessmentTime", "The assessment takes approximately 5-10 minutes to complete"),
    ("common.questionsCount", "carefully crafted questions"),
    ("common.evidenceBased", "Evidence-based assessment methods"),
    ("common.immediateResults", "Immediate, personalized results"),
    ("form.personalInfo", "Personal Information"),
    ("form.name", "Full Name"),
    ("form.age", "Age Range"),
    ("form.gender", "Gender"),
    ("form.occupation", "Current Occupation"),
    ("form.mentalHealthBackground", "Mental Health Background (Optional)"),
    ("form.previousTherapy", "Previous Therapy Experience"),
    ("form.currentMedication", "Current Medication for Mental Health"),
    ("form.currentSituation", "Current Situation"),
    ("form.supportSystem", "Support System"),
    ("form.stressLevel", "Current Stress Level"),
    ("form.selectAge", "Select age range"),
    ("form.selectGender", "Select gender"),
    ("form.selectOption", "Select option"),
    ("form.privacyNote", "🔒 Your information is completely confidential and is used only to personalize your assessment results."),
    ("questions.progressLabel", "Question {current} of {total}"),
    ("results.yourScore", "Your Assessment Score"),
    ("results.level", "Level"),
    ("results.recommendations", "Recommendations"),
    ("results.personalizedInsights", "Personalized Insights"),
    ("results.strengths", "Your Strengths"),
    ("results.riskFactors", "Areas to Address"),
    ("results.professionalResources", "Professional Resources"),
    ("results.crisisSupport", "Crisis Support"),
    ("results.findHelp", "Find Help"),
    ("results.assessmentSummary", "Assessment Summary"),
    ("results.importantNotice", "Important Notice"),
    ("results.disclaimer", "This assessment is for informational purposes only and is not a substitute for professional medical or psychological advice."),
    ("emergency.suicideHotline", "Morocco Suicide Prevention: 0801 007 755"),
    ("emergency.emergencyServices", "Emergency Services: 15 (SAMU) / 19 (Police)"),
    ("emergency.mentalHealthHotline", "Mental Health Support: 0801 007 755"),
    ("emergency.nationalHelpline", "SOS Help Morocco: +212 5 22 94 94 94"),
];

pub(super) const FR: &[(&str, &str)] = &[
    ("common.title", "Évaluation du Bien-être Émotionnel"),
    ("common.description", "Prenez quelques minutes pour comprendre votre bien-être émotionnel. Cette évaluation scientifiquement informée vous fournira des insights personnalisés et des recommandations pour votre parcours de santé mentale."),
    ("common.continue", "Continuer"),
    ("common.retake", "Refaire l'évaluation"),
    ("common.print", "Imprimer les résultats"),
    ("common.skip", "Passer cette étape"),
    ("common.loading", "Chargement..."),
    ("common.male", "Homme"),
    ("common.female", "Femme"),
    ("common.startAssessment", "Commencer l'Évaluation"),
    ("common.comprehensiveAnalysis", "Analyse Complète"),
    ("common.comprehensiveAnalysisDesc", "Évalue l'anxiété, la dépression, les traumatismes, le stress et les indicateurs d'humeur"),
    ("common.personalizedResults", "Résultats Personnalisés"),
    ("common.personalizedResultsDesc", "Recevez des recommandations sur mesure basées sur vos réponses"),
    ("common.actionableInsights", "Aperçus Actionnables"),
    ("common.actionableInsightsDesc", "Obtenez des étapes pratiques pour soutenir votre bien-être mental"),
    ("common.whatToExpect", "À Quoi S'Attendre"),
    ("common.assessmentTime", "L'évaluation prend environ 5 à 10 minutes à compléter"),
    ("common.questionsCount", "questions soigneusement élaborées"),
    ("common.evidenceBased", "Méthodes d'évaluation basées sur des preuves"),
    ("common.immediateResults", "Résultats immédiats et personnalisés"),
    ("form.personalInfo", "Informations Personnelles"),
    ("form.name", "Nom Complet"),
    ("form.age", "Tranche d'âge"),
    ("form.gender", "Genre"),
    ("form.occupation", "Profession Actuelle"),
    ("form.mentalHealthBackground", "Antécédents de Santé Mentale (Optionnel)"),
    ("form.previousTherapy", "Expérience Thérapeutique Antérieure"),
    ("form.currentMedication", "Médicaments Actuels pour la Santé Mentale"),
    ("form.currentSituation", "Situation Actuelle"),
    ("form.supportSystem", "Système de Soutien"),
    ("form.stressLevel", "Niveau de Stress Actuel"),
    ("form.selectAge", "Sélectionner la tranche d'âge"),
    ("form.selectGender", "Sélectionner le genre"),
    ("form.selectOption", "Sélectionner une option"),
    ("form.privacyNote", "🔒 Vos informations sont entièrement confidentielles et utilisées uniquement pour personnaliser vos résultats d'évaluation."),
    ("questions.progressLabel", "Question {current} sur {total}"),
    ("results.yourScore", "Votre Score d'Évaluation"),
    ("results.level", "Niveau"),
    ("results.recommendations", "Recommandations"),
    ("results.personalizedInsights", "Aperçus Personnalisés"),
    ("results.strengths", "Vos Forces"),
    ("results.riskFactors", "Domaines à Traiter"),
    ("results.professionalResources", "Ressources Professionnelles"),
    ("results.crisisSupport", "Soutien de Crise"),
    ("results.findHelp", "Trouver de l'Aide"),
    ("results.assessmentSummary", "Résumé de l'Évaluation"),
    ("results.importantNotice", "Avis Important"),
    ("results.disclaimer", "Cette évaluation est à des fins informatives uniquement et ne remplace pas les conseils médicaux ou psychologiques professionnels."),
    ("emergency.suicideHotline", "Prévention du Suicide Maroc: 0801 007 755"),
    ("emergency.emergencyServices", "Services d'Urgence: 15 (SAMU) / 19 (Police)"),
    ("emergency.mentalHealthHotline", "Soutien Santé Mentale: 0801 007 755"),
    ("emergency.nationalHelpline", "SOS Aide Maroc: +212 5 22 94 94 94"),
];

pub(super) const AR: &[(&str, &str)] = &[
    ("common.title", "تقييم الصحة النفسية والعاطفية"),
    ("common.description", "خذ بضع دقائق لفهم صحتك العاطفية. سيوفر لك هذا التقييم المستند علمياً رؤى شخصية وتوصيات لرحلة صحتك النفسية."),
    ("common.continue", "متابعة"),
    ("common.retake", "إعادة التقييم"),
    ("common.print", "طباعة النتائج"),
    ("common.skip", "تخطي هذه الخطوة"),
    ("common.loading", "جاري التحميل..."),
    ("common.male", "ذكر"),
    ("common.female", "أنثى"),
    ("common.startAssessment", "بدء التقييم"),
    ("common.comprehensiveAnalysis", "تحليل شامل"),
    ("common.comprehensiveAnalysisDesc", "يقيم القلق والاكتئاب والصدمات والتوتر ومؤشرات المزاج"),
    ("common.personalizedResults", "نتائج شخصية"),
    ("common.personalizedResultsDesc", "احصل على توصيات مخصصة بناءً على إجاباتك"),
    ("common.actionableInsights", "رؤى قابلة للتطبيق"),
    ("common.actionableInsightsDesc", "احصل على خطوات عملية لدعم صحتك النفسية"),
    ("common.whatToExpect", "ما تتوقعه"),
    ("common.assessmentTime", "يستغرق التقييم حوالي 5-10 دقائق للإكمال"),
    ("common.questionsCount", "أسئلة مصممة بعناية"),
    ("common.evidenceBased", "طرق تقييم مبنية على الأدلة"),
    ("common.immediateResults", "نتائج فورية وشخصية"),
    ("form.personalInfo", "المعلومات الشخصية"),
    ("form.name", "الاسم الكامل"),
    ("form.age", "الفئة العمرية"),
    ("form.gender", "الجنس"),
    ("form.occupation", "المهنة الحالية"),
    ("form.mentalHealthBackground", "السوابق النفسية (اختياري)"),
    ("form.previousTherapy", "التجربة العلاجية السابقة"),
    ("form.currentMedication", "الأدوية الحالية للصحة النفسية"),
    ("form.currentSituation", "الوضع الحالي"),
    ("form.supportSystem", "نظام الدعم"),
    ("form.stressLevel", "مستوى التوتر الحالي"),
    ("form.selectAge", "اختر الفئة العمرية"),
    ("form.selectGender", "اختر الجنس"),
    ("form.selectOption", "اختر خياراً"),
    ("form.privacyNote", "🔒 معلوماتك سرية تماماً وتُستخدم فقط لتخصيص نتائج التقييم الخاصة بك."),
    ("questions.progressLabel", "السؤال {current} من {total}"),
    ("results.yourScore", "نتيجة التقييم الخاصة بك"),
    ("results.level", "المستوى"),
    ("results.recommendations", "التوصيات"),
    ("results.personalizedInsights", "رؤى شخصية"),
    ("results.strengths", "نقاط قوتك"),
    ("results.riskFactors", "المجالات التي تحتاج للعمل عليها"),
    ("results.professionalResources", "الموارد المهنية"),
    ("results.crisisSupport", "دعم الأزمات"),
    ("results.findHelp", "العثور على المساعدة"),
    ("results.assessmentSummary", "ملخص التقييم"),
    ("results.importantNotice", "ملاحظة مهمة"),
    ("results.disclaimer", "هذا التقييم لأغراض إعلامية فقط وليس بديلاً عن المشورة الطبية أو النفسية المهنية."),
    ("emergency.suicideHotline", "الوقاية من الانتحار المغرب: 0801 007 755"),
    ("emergency.emergencyServices", "خدمات الطوارئ: 15 (سامو) / 19 (شرطة)"),
    ("emergency.mentalHealthHotline", "دعم الصحة النفسية: 0801 007 755"),
    ("emergency.nationalHelpline", "SOS مساعدة المغرب: +212 5 22 94 94 94"),
];
