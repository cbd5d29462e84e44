//! Every variant of `leptess::Variable`, in declaration order. Keep in step
//! with the `leptess` version in Cargo.toml.

use leptess::Variable::{self, *};

pub(super) const KNOWN_VARIABLES: &[Variable] = &[
    ClassifyNumCpLevels,
    TextordDotmatrixGap,
    TextordDebugBlock,
    TextordPitchRange,
    TextordWordsVetoPower,
    TextordTabfindShowStrokewidths,
    PitsyncLinearVersion,
    PitsyncFakeDepth,
    OldblHoledLosscount,
    TextordSkewsmoothOffset,
    TextordSkewsmoothOffset2,
    TextordTestX,
    TextordTestY,
    TextordMinBlobsInRow,
    TextordSplineMinblobs,
    TextordSplineMedianwin,
    TextordMaxBlobOverlaps,
    TextordMinXheight,
    TextordLmsLineTrials,
    TextordTabfindShowImages,
    TextordFpChopError,
    EdgesMaxChildrenPerOutline,
    EdgesMaxChildrenLayers,
    EdgesChildrenPerGrandchild,
    EdgesChildrenCountLimit,
    EdgesMinNonhole,
    EdgesPathareaRatio,
    DevanagariSplitDebuglevel,
    TextordTabfindShowPartitions,
    TextordDebugTabfind,
    TextordDebugBugs,
    TextordTestregionLeft,
    TextordTestregionTop,
    TextordTestregionRight,
    TextordTestregionBottom,
    EditorImageXpos,
    EditorImageYpos,
    EditorImageMenuheight,
    EditorImageWordBbColor,
    EditorImageBlobBbColor,
    EditorImageTextColor,
    EditorDbwinXpos,
    EditorDbwinYpos,
    EditorDbwinHeight,
    EditorDbwinWidth,
    EditorWordXpos,
    EditorWordYpos,
    EditorWordHeight,
    EditorWordWidth,
    WordrecDisplaySplits,
    PolyDebug,
    PolyWideObjectsBetter,
    WordrecDisplayAllBlobs,
    WordrecBlobPause,
    TextordFpChopping,
    TextordForceMakePropWords,
    TextordChopperTest,
    TextordRestoreUnderlines,
    TextordShowInitialWords,
    TextordShowNewWords,
    TextordShowFixedWords,
    TextordBlocksallFixed,
    TextordBlocksallProp,
    TextordBlocksallTesting,
    TextordTestMode,
    TextordPitchScalebigwords,
    TextordAllProp,
    TextordDebugPitchTest,
    TextordDisablePitchTest,
    TextordFastPitchTest,
    TextordDebugPitchMetric,
    TextordShowRowCuts,
    TextordShowPageCuts,
    TextordPitchCheat,
    TextordBlockndocFixed,
    TextordShowTables,
    TextordTablefindShowMark,
    TextordTablefindShowStats,
    TextordTablefindRecognizeTables,
    TextordTabfindShowInitialtabs,
    TextordTabfindShowFinaltabs,
    TextordTabfindOnlyStrokewidths,
    TextordReallyOldXheight,
    TextordOldblDebug,
    TextordDebugBaselines,
    TextordOldblParadef,
    TextordOldblSplitSplines,
    TextordOldblMergeParts,
    OldblCorrfix,
    OldblXhfix,
    TextordOcropusMode,
    TextordHeavyNr,
    TextordShowInitialRows,
    TextordShowParallelRows,
    TextordShowExpandedRows,
    TextordShowFinalRows,
    TextordShowFinalBlobs,
    TextordTestLandscape,
    TextordParallelBaselines,
    TextordStraightBaselines,
    TextordOldBaselines,
    TextordOldXheight,
    TextordFixXheightBug,
    TextordFixMakerowBug,
    TextordDebugXheights,
    TextordBiasedSkewcalc,
    TextordInterpolatingSkew,
    TextordNewInitialXheight,
    TextordDebugBlob,
    GapmapDebug,
    GapmapUseEnds,
    GapmapNoIsolatedQuanta,
    EdgesUseNewOutlineComplexity,
    EdgesDebug,
    EdgesChildrenFix,
    TextordShowFixedCuts,
    DevanagariSplitDebugimage,
    TextordTabfindShowInitialPartitions,
    TextordTabfindShowRejectBlobs,
    TextordTabfindShowColumns,
    TextordTabfindShowBlocks,
    TextordTabfindFindTables,
    TextordSpaceSizeIsVariable,
    TextordDebugPrintable,
    EquationdetectSaveBiImage,
    EquationdetectSaveSptImage,
    EquationdetectSaveSeedImage,
    EquationdetectSaveMergedImage,
    StreamFilelist,
    DebugFile,
    Dotproduct,
    ClassifyFontName,
    FxDebugfile,
    EditorImageWinName,
    EditorDbwinName,
    EditorWordName,
    DocumentTitle,
    ClassifyPicoFeatureLength,
    ClassifyNormAdjMidpoint,
    ClassifyNormAdjCurl,
    ClassifyMinSlope,
    ClassifyMaxSlope,
    ClassifyCpAnglePadLoose,
    ClassifyCpAnglePadMedium,
    ClassifyCpAnglePadTight,
    ClassifyCpEndPadLoose,
    ClassifyCpEndPadMedium,
    ClassifyCpEndPadTight,
    ClassifyCpSidePadLoose,
    ClassifyCpSidePadMedium,
    ClassifyCpSidePadTight,
    ClassifyPpAnglePad,
    ClassifyPpEndPad,
    ClassifyPpSidePad,
    TextordUnderlineOffset,
    TextordWordstatsSmoothFactor,
    TextordWidthSmoothFactor,
    TextordWordsWidthIle,
    TextordWordsMaxspace,
    TextordWordsDefaultMaxspace,
    TextordWordsDefaultMinspace,
    TextordWordsMinMinspace,
    TextordWordsDefaultNonspace,
    TextordWordsInitialLower,
    TextordWordsInitialUpper,
    TextordWordsMinlarge,
    TextordWordsPitchsdThreshold,
    TextordWordsDefFixed,
    TextordWordsDefProp,
    TextordPitchRowsimilarity,
    WordsInitialLower,
    WordsInitialUpper,
    WordsDefaultPropNonspace,
    WordsDefaultFixedSpace,
    WordsDefaultFixedLimit,
    TextordWordsDefiniteSpread,
    TextordSpacesizeRatiofp,
    TextordSpacesizeRatioprop,
    TextordFpiqrRatio,
    TextordMaxPitchIqr,
    TextordFpMinWidth,
    TextordProjectionScale,
    TextordBalanceFactor,
    TextordTabvectorVerticalGapFraction,
    TextordTabvectorVerticalBoxRatio,
    PitsyncJoinedEdge,
    PitsyncOffsetFreecutFraction,
    OldblXhfract,
    OldblDotErrorSize,
    TextordOldblJumplimit,
    TextordSplineShiftFraction,
    TextordSplineOutlierFraction,
    TextordSkewIle,
    TextordSkewLag,
    TextordLinespaceIqrlimit,
    TextordWidthLimit,
    TextordChopWidth,
    TextordExpansionFactor,
    TextordOverlapX,
    TextordMinxh,
    TextordMinLinesize,
    TextordExcessBlobsize,
    TextordOccupancyThreshold,
    TextordUnderlineWidth,
    TextordMinBlobHeightFraction,
    TextordXheightModeFraction,
    TextordAscheightModeFraction,
    TextordDescheightModeFraction,
    TextordAscxRatioMin,
    TextordAscxRatioMax,
    TextordDescxRatioMin,
    TextordDescxRatioMax,
    TextordXheightErrorMargin,
    GapmapBigGaps,
    TextordFpChopSnap,
    EdgesChildarea,
    EdgesBoxarea,
    TextordUnderlineThreshold,
    AmbigsDebugLevel,
    ClassifyDebugLevel,
    ClassifyNormMethod,
    MatcherDebugLevel,
    MatcherDebugFlags,
    ClassifyLearningDebugLevel,
    MatcherPermanentClassesMin,
    MatcherMinExamplesForPrototyping,
    MatcherSufficientExamplesForPrototyping,
    ClassifyAdaptProtoThreshold,
    ClassifyAdaptFeatureThreshold,
    ClassifyClassPrunerThreshold,
    ClassifyClassPrunerMultiplier,
    ClassifyCpCutoffStrength,
    ClassifyIntegerMatcherMultiplier,
    DawgDebugLevel,
    HyphenDebugLevel,
    StopperSmallwordSize,
    StopperDebugLevel,
    TesseditTruncateWordchoiceLog,
    MaxPermuterAttempts,
    RepairUnchoppedBlobs,
    ChopDebug,
    ChopSplitLength,
    ChopSameDistance,
    ChopMinOutlinePoints,
    ChopSeamPileSize,
    ChopInsideAngle,
    ChopMinOutlineArea,
    ChopCenteredMaxwidth,
    ChopXyWeight,
    WordrecDebugLevel,
    WordrecMaxJoinChunks,
    SegsearchDebugLevel,
    SegsearchMaxPainPoints,
    SegsearchMaxFutileClassifications,
    LanguageModelDebugLevel,
    LanguageModelNgramOrder,
    LanguageModelViterbiListMaxNumPrunable,
    LanguageModelViterbiListMaxSize,
    LanguageModelMinCompoundLength,
    WordrecDisplaySegmentations,
    TesseditPagesegMode,
    TesseditOcrEngineMode,
    PagesegDevanagariSplitStrategy,
    OcrDevanagariSplitStrategy,
    BidiDebug,
    ApplyboxDebug,
    ApplyboxPage,
    TesseditBigramDebug,
    DebugNoiseRemoval,
    NoiseMaxperblob,
    NoiseMaxperword,
    DebugXHtLevel,
    QualityMinInitialAlphasReqd,
    TesseditTessAdaptionMode,
    MultilangDebugLevel,
    ParagraphDebugLevel,
    TesseditPreserveMinWdLen,
    CrunchRatingMax,
    CrunchPotIndicators,
    CrunchLeaveLcStrings,
    CrunchLeaveUcStrings,
    CrunchLongRepetitions,
    CrunchDebug,
    FixspNonNoiseLimit,
    FixspDoneMode,
    DebugFixSpaceLevel,
    XHtAcceptanceTolerance,
    XHtMinChange,
    SuperscriptDebug,
    JpgQuality,
    UserDefinedDpi,
    MinCharactersToTry,
    SuspectLevel,
    SuspectShortWords,
    TesseditRejectMode,
    TesseditImageBorder,
    MinSaneXHtPixels,
    TesseditPageNumber,
    TesseditParallelize,
    LstmChoiceMode,
    TospDebugLevel,
    TospEnoughSpaceSamplesForMedian,
    TospRedoKernLimit,
    TospFewSamples,
    TospShortRow,
    TospSanityMethod,
    TextordMaxNoiseSize,
    TextordBaselineDebug,
    TextordNoiseSizefraction,
    TextordNoiseTranslimit,
    TextordNoiseSncount,
    UseAmbigsForAdaption,
    AllowBlobDivision,
    PrioritizeDivision,
    ClassifyEnableLearning,
    TessCnMatching,
    TessBnMatching,
    ClassifyEnableAdaptiveMatcher,
    ClassifyUsePreAdaptedTemplates,
    ClassifySaveAdaptedTemplates,
    ClassifyEnableAdaptiveDebugger,
    ClassifyNonlinearNorm,
    DisableCharacterFragments,
    ClassifyDebugCharacterFragments,
    MatcherDebugSeparateWindows,
    ClassifyBlnNumericMode,
    LoadSystemDawg,
    LoadFreqDawg,
    LoadUnambigDawg,
    LoadPuncDawg,
    LoadNumberDawg,
    LoadBigramDawg,
    UseOnlyFirstUft8Step,
    StopperNoAcceptableChoices,
    SegmentNonalphabeticScript,
    SaveDocWords,
    MergeFragmentsInMatrix,
    WordrecEnableAssoc,
    ForceWordAssoc,
    ChopEnable,
    ChopVerticalCreep,
    ChopNewSeamPile,
    AssumeFixedPitchCharSegment,
    WordrecSkipNoTruthWords,
    WordrecDebugBlamer,
    WordrecRunBlamer,
    SaveAltChoices,
    LanguageModelNgramOn,
    LanguageModelNgramUseOnlyFirstUft8Step,
    LanguageModelNgramSpaceDelimitedLanguage,
    LanguageModelUseSigmoidalCertainty,
    TesseditResegmentFromBoxes,
    TesseditResegmentFromLineBoxes,
    TesseditTrainFromBoxes,
    TesseditMakeBoxesFromBoxes,
    TesseditTrainLineRecognizer,
    TesseditDumpPagesegImages,
    TesseditDoInvert,
    TesseditAmbigsTraining,
    TesseditAdaptionDebug,
    ApplyboxLearnCharsAndCharFragsMode,
    ApplyboxLearnNgramsMode,
    TesseditDisplayOutwords,
    TesseditDumpChoices,
    TesseditTimingDebug,
    TesseditFixFuzzySpaces,
    TesseditUnrejAnyWd,
    TesseditFixHyphens,
    TesseditEnableDocDict,
    TesseditDebugFonts,
    TesseditDebugBlockRejection,
    TesseditEnableBigramCorrection,
    TesseditEnableDictCorrection,
    EnableNoiseRemoval,
    TesseditMinimalRejPass1,
    TesseditTestAdaption,
    TestPt,
    ParagraphTextBased,
    LstmUseMatrix,
    TesseditGoodQualityUnrej,
    TesseditUseRejectSpaces,
    TesseditPreserveBlkRejPerfectWds,
    TesseditPreserveRowRejPerfectWds,
    TesseditDontBlkrejGoodWds,
    TesseditDontRowrejGoodWds,
    TesseditRowRejGoodDocs,
    TesseditRejectBadQualWds,
    TesseditDebugDocRejection,
    TesseditDebugQualityMetrics,
    BlandUnrej,
    UnlvTildeCrunching,
    HocrFontInfo,
    HocrCharBoxes,
    CrunchEarlyMergeTessFails,
    CrunchEarlyConvertBadUnlvChs,
    CrunchTerribleGarbage,
    CrunchLeaveOkStrings,
    CrunchAcceptOk,
    CrunchLeaveAcceptStrings,
    CrunchIncludeNumerals,
    TesseditPreferJoinedPunct,
    TesseditWriteBlockSeparators,
    TesseditWriteRepCodes,
    TesseditWriteUnlv,
    TesseditCreateTxt,
    TesseditCreateHocr,
    TesseditCreateAlto,
    TesseditCreateLstmbox,
    TesseditCreateTsv,
    TesseditCreateWordstrbox,
    TesseditCreatePdf,
    TextonlyPdf,
    SuspectConstrain1Il,
    TesseditMinimalRejection,
    TesseditZeroRejection,
    TesseditWordForWord,
    TesseditZeroKelvinRejection,
    TesseditRejectionDebug,
    TesseditFlip0O,
    RejTrustDocDawg,
    Rej1IlUseDictWord,
    Rej1IlTrustPermuterType,
    RejUseTessAccepted,
    RejUseTessBlanks,
    RejUseGoodPerm,
    RejUseSensibleWd,
    RejAlphasInNumberPerm,
    TesseditCreateBoxfile,
    TesseditWriteImages,
    InteractiveDisplayMode,
    TesseditOverridePermuter,
    TesseditUsePrimaryParamsModel,
    TextordTabfindShowVlines,
    TextordUseCjkFpModel,
    PolyAllowDetailedFx,
    TesseditInitConfigOnly,
    TextordEquationDetect,
    TextordTabfindVerticalText,
    TextordTabfindForceVerticalText,
    PreserveInterwordSpaces,
    PagesegApplyMusicMask,
    TextordSingleHeightMode,
    TospOldToMethod,
    TospOldToConstrainSpKn,
    TospOnlyUsePropRows,
    TospForceWordbreakOnPunct,
    TospUsePreChopping,
    TospOldToBugFix,
    TospBlockUseCertSpaces,
    TospRowUseCertSpaces,
    TospNarrowBlobsNotCert,
    TospRowUseCertSpaces1,
    TospRecoveryIsolatedRowStats,
    TospOnlySmallGapsForKern,
    TospAllFlipsFuzzy,
    TospFuzzyLimitAll,
    TospStatsUseXhtGaps,
    TospUseXhtGaps,
    TospOnlyUseXhtGaps,
    TospRule9TestPunct,
    TospFlipFuzzKnToSp,
    TospFlipFuzzSpToKn,
    TospImproveThresh,
    TextordNoRejects,
    TextordShowBlobs,
    TextordShowBoxes,
    TextordNoiseRejwords,
    TextordNoiseRejrows,
    TextordNoiseDebug,
    ClassifyLearnDebugStr,
    UserWordsFile,
    UserWordsSuffix,
    UserPatternsFile,
    UserPatternsSuffix,
    OutputAmbigWordsFile,
    WordToDebug,
    TesseditCharBlacklist,
    TesseditCharWhitelist,
    TesseditCharUnblacklist,
    TesseditWriteParamsToFile,
    ApplyboxExposurePattern,
    ChsLeadingPunct,
    ChsTrailingPunct1,
    ChsTrailingPunct2,
    OutlinesOdd,
    Outlines2,
    NumericPunctuation,
    UnrecognisedChar,
    OkRepeatedChNonAlphanumWds,
    ConflictSetIl1,
    FileType,
    TesseditLoadSublangs,
    PageSeparator,
    ClassifyCharNormRange,
    ClassifyMaxRatingRatio,
    ClassifyMaxCertaintyMargin,
    MatcherGoodThreshold,
    MatcherReliableAdaptiveResult,
    MatcherPerfectThreshold,
    MatcherBadMatchPad,
    MatcherRatingMargin,
    MatcherAvgNoiseSize,
    MatcherClusteringMaxAngleDelta,
    ClassifyMisfitJunkPenalty,
    RatingScale,
    CertaintyScale,
    TesseditClassMissScale,
    ClassifyAdaptedPruningFactor,
    ClassifyAdaptedPruningThreshold,
    ClassifyCharacterFragmentsGarbageCertaintyThreshold,
    SpeckleLargeMaxSize,
    SpeckleRatingPenalty,
    XheightPenaltySubscripts,
    XheightPenaltyInconsistent,
    SegmentPenaltyDictFrequentWord,
    SegmentPenaltyDictCaseOk,
    SegmentPenaltyDictCaseBad,
    SegmentPenaltyDictNonword,
    SegmentPenaltyGarbage,
    StopperNondictCertaintyBase,
    StopperPhase2CertaintyRejectionOffset,
    StopperCertaintyPerChar,
    StopperAllowableCharacterBadness,
    DocDictPendingThreshold,
    DocDictCertaintyThreshold,
    TesseditCertaintyThreshold,
    ChopSplitDistKnob,
    ChopOverlapKnob,
    ChopCenterKnob,
    ChopSharpnessKnob,
    ChopWidthChangeKnob,
    ChopOkSplit,
    ChopGoodSplit,
    SegsearchMaxCharWhRatio,
    LanguageModelNgramSmallProb,
    LanguageModelNgramNonmatchScore,
    LanguageModelNgramScaleFactor,
    LanguageModelNgramRatingFactor,
    LanguageModelPenaltyNonFreqDictWord,
    LanguageModelPenaltyNonDictWord,
    LanguageModelPenaltyPunc,
    LanguageModelPenaltyCase,
    LanguageModelPenaltyScript,
    LanguageModelPenaltyChartype,
    LanguageModelPenaltyFont,
    LanguageModelPenaltySpacing,
    LanguageModelPenaltyIncrement,
    NoiseCertBasechar,
    NoiseCertDisjoint,
    NoiseCertPunc,
    NoiseCertFactor,
    QualityRejPc,
    QualityBlobPc,
    QualityOutlinePc,
    QualityCharPc,
    TestPtX,
    TestPtY,
    TesseditRejectDocPercent,
    TesseditRejectBlockPercent,
    TesseditRejectRowPercent,
    TesseditWholeWdRejRowPercent,
    TesseditGoodDocStillRowrejWd,
    QualityRowrejPc,
    CrunchTerribleRating,
    CrunchPoorGarbageCert,
    CrunchPoorGarbageRate,
    CrunchPotPoorRate,
    CrunchPotPoorCert,
    CrunchDelRating,
    CrunchDelCert,
    CrunchDelMinHt,
    CrunchDelMaxHt,
    CrunchDelMinWidth,
    CrunchDelHighWord,
    CrunchDelLowWord,
    CrunchSmallOutlinesSize,
    FixspSmallOutlinesSize,
    SuperscriptWorseCertainty,
    SuperscriptBetteredCertainty,
    SuperscriptScaledownRatio,
    SubscriptMaxYTop,
    SuperscriptMinYBottom,
    SuspectRatingPerCh,
    SuspectAcceptRating,
    TesseditLowerFlipHyphen,
    TesseditUpperFlipHyphen,
    RejWholeOfMostlyRejectWordFract,
    MinOrientationMargin,
    TextordTabfindVerticalTextRatio,
    TextordTabfindAlignedGapFraction,
    TospOldSpKnThFactor,
    TospThresholdBias1,
    TospThresholdBias2,
    TospNarrowFraction,
    TospNarrowAspectRatio,
    TospWideFraction,
    TospWideAspectRatio,
    TospFuzzySpaceFactor,
    TospFuzzySpaceFactor1,
    TospFuzzySpaceFactor2,
    TospGapFactor,
    TospKernGapFactor1,
    TospKernGapFactor2,
    TospKernGapFactor3,
    TospIgnoreBigGaps,
    TospIgnoreVeryBigGaps,
    TospRepSpace,
    TospEnoughSmallGaps,
    TospTableKnSpRatio,
    TospTableXhtSpRatio,
    TospTableFuzzyKnSpRatio,
    TospFuzzyKnFraction,
    TospFuzzySpFraction,
    TospMinSaneKnSp,
    TospInitGuessKnMult,
    TospInitGuessXhtMult,
    TospMaxSaneKnThresh,
    TospFlipCaution,
    TospLargeKerning,
    TospDontFoolWithSmallKerns,
    TospNearLhEdge,
    TospSillyKnSpGap,
    TospPassWideFuzzSpToContext,
    TextordNoiseAreaRatio,
    TextordInitialxIle,
    TextordInitialascIle,
    TextordNoiseSizelimit,
    TextordNoiseNormratio,
    TextordNoiseSyfract,
    TextordNoiseSxfract,
    TextordNoiseHfract,
    TextordNoiseRowratio,
    TextordBlshiftMaxshift,
    TextordBlshiftXfraction,
];
